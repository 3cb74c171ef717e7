use super::*;

#[test]
fn initials_take_first_letters_of_two_tokens() {
    assert_eq!(initials(Some("Alex Johnson"), '?'), "AJ");
    assert_eq!(initials(Some("maria de la cruz"), '?'), "MD");
}

#[test]
fn single_token_yields_single_initial() {
    assert_eq!(initials(Some("Madonna"), '?'), "M");
}

#[test]
fn missing_or_blank_name_uses_fallback() {
    assert_eq!(initials(None, 'G'), "G");
    assert_eq!(initials(Some(""), 'G'), "G");
    assert_eq!(initials(Some("   \t "), 'G'), "G");
}

#[test]
fn irregular_whitespace_is_collapsed() {
    assert_eq!(initials(Some("  jane\t\n doe  "), '?'), "JD");
}

#[test]
fn uppercase_expansion_is_truncated_to_two_chars() {
    // 'ß' uppercases to "SS".
    assert_eq!(initials(Some("ßarah Lee"), '?'), "SS");
}

#[test]
fn non_latin_names_keep_first_character() {
    assert_eq!(initials(Some("Ólafur Arnalds"), '?'), "ÓA");
    assert_eq!(initials(Some("山田 太郎"), '?'), "山太");
}

#[test]
fn blank_fallback_is_replaced_with_default() {
    assert_eq!(initials(None, ' '), DEFAULT_FALLBACK.to_string());
}

#[test]
fn avatar_size_keys_and_default() {
    assert_eq!(AvatarSize::default(), AvatarSize::Md);
    assert_eq!(AvatarSize::from("xl"), AvatarSize::Xl);
    assert_eq!(AvatarSize::from("giant"), AvatarSize::Md);
}

#[test]
fn avatar_classes_apply_overrides_last() {
    let classes = avatar_classes(AvatarSize::Sm, Some("bg-indigo-100 rounded-md"));
    let tokens: Vec<&str> = classes.split_whitespace().collect();
    assert!(tokens.contains(&"h-8"));
    assert!(tokens.contains(&"bg-indigo-100"));
    assert!(!tokens.contains(&"bg-gray-200"));
    assert!(tokens.contains(&"rounded-md"));
    assert!(!tokens.contains(&"rounded-full"));
}
