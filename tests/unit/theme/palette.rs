use super::*;

#[test]
fn light_and_dark_swap_background_and_text() {
    let light = Theme::Light.palette();
    let dark = Theme::Dark.palette();
    assert_eq!(light.background, WHITE);
    assert_eq!(light.text, BLACK);
    assert_eq!(dark.background, BLACK);
    assert_eq!(dark.text, WHITE);
    assert_eq!(light.accent, dark.accent);
    assert_eq!(light.accent.to_hex(), "#f15e22");
}

#[test]
fn default_theme_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn parses_names_case_insensitively() {
    assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
    assert_eq!(" light ".parse::<Theme>().unwrap(), Theme::Light);
    assert!("sepia".parse::<Theme>().is_err());
    let t: Theme = serde_json::from_str("\"dark\"").unwrap();
    assert_eq!(t, Theme::Dark);
}
