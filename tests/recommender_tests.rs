use ayurveda_backend::services::recommender::{
    Dosha, INVALID_DOSHA, known_doshas, recommend,
};

#[test]
fn test_pitta_recommendations() {
    assert_eq!(
        recommend("pitta"),
        ["Coconut water", "Cucumber", "Milk", "Avoid spicy food"]
    );
}

#[test]
fn test_each_known_dosha_returns_its_own_list() {
    for d in Dosha::ALL {
        let list = recommend(d.as_str());
        assert_eq!(list.len(), 4);
        assert_eq!(list, d.recommendations().to_vec());
        for other in Dosha::ALL.into_iter().filter(|o| *o != d) {
            assert_ne!(list, other.recommendations().to_vec());
        }
    }
}

#[test]
fn test_unknown_dosha_fallback() {
    for key in ["", "unknown", "vata ", "pitta-kapha", "tridosha"] {
        assert_eq!(recommend(key), [INVALID_DOSHA]);
    }
    assert_eq!(INVALID_DOSHA, "Invalid dosha (vata/pitta/kapha)");
}

#[test]
fn test_recommend_is_repeatable() {
    let first = recommend("kapha");
    let second = recommend("kapha");
    assert_eq!(first, second);
}

#[test]
fn test_known_doshas_in_table_order() {
    assert_eq!(known_doshas(), ["vata", "pitta", "kapha"]);
}
