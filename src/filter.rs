use crate::model::MarkerKey;
use crate::trello::model::Sticker;

/// True when `sticker` is the configured target.
pub fn matches(sticker: &Sticker, target: &MarkerKey) -> bool {
    match target {
        MarkerKey::Id(id) => sticker.id == *id,
        MarkerKey::Image(image) => sticker.image == *image,
    }
}

/// A card qualifies only if at least one of its stickers is the target.
/// No stickers at all never qualifies.
pub fn qualifies(stickers: &[Sticker], target: &MarkerKey) -> bool {
    stickers.iter().any(|s| matches(s, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sticker(id: &str, image: &str) -> Sticker {
        Sticker {
            id: id.into(),
            image: image.into(),
            image_url: None,
        }
    }

    #[test]
    fn empty_set_never_qualifies() {
        assert!(!qualifies(&[], &MarkerKey::Image("x".into())));
        assert!(!qualifies(&[], &MarkerKey::Id("x".into())));
    }

    #[test]
    fn non_target_stickers_do_not_qualify() {
        let stickers = vec![sticker("s1", "other")];
        assert!(!qualifies(&stickers, &MarkerKey::Image("x".into())));
    }

    #[test]
    fn target_among_others_qualifies() {
        let stickers = vec![sticker("s1", "x"), sticker("s2", "other")];
        assert!(qualifies(&stickers, &MarkerKey::Image("x".into())));
    }

    #[test]
    fn match_uses_the_configured_attribute() {
        let stickers = vec![sticker("abc123", "check")];
        assert!(qualifies(&stickers, &MarkerKey::Id("abc123".into())));
        assert!(!qualifies(&stickers, &MarkerKey::Id("check".into())));
        assert!(qualifies(&stickers, &MarkerKey::Image("check".into())));
        assert!(!qualifies(&stickers, &MarkerKey::Image("abc123".into())));
    }

    #[test]
    fn match_is_exact() {
        let stickers = vec![sticker("s1", "Check")];
        assert!(!qualifies(&stickers, &MarkerKey::Image("check".into())));
        assert!(!qualifies(&stickers, &MarkerKey::Image("Chec".into())));
    }
}
