use super::*;

#[test]
fn test_parse_custom_topics() {
    assert_eq!(
        parse_custom_topics(" Paris street style, vintage denim ,, "),
        vec!["Paris street style".to_string(), "vintage denim".to_string()]
    );
    assert!(parse_custom_topics("  ,  ").is_empty());
    assert!(parse_custom_topics("").is_empty());
}

#[test]
fn test_select_topics_order() {
    let custom = vec!["linen".to_string()];
    assert_eq!(
        select_topics(&["runway", "OOTD"], &custom),
        vec!["runway", "OOTD", "linen"]
    );
}

#[test]
fn test_query_and_slug() {
    assert_eq!(topic_query("street style"), "street,style");
    assert_eq!(topic_slug("  Street   Style "), "street_style");
}

#[test]
fn test_limits() {
    assert_eq!(FASHION_TOPICS.len(), 10);
    assert!(LIMIT_RANGE.contains(&DEFAULT_LIMIT));
}
