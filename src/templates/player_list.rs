pub static PLAYER_LIST: &'static str = r#"{{#each players}}{{> PLAYER_CARD_PARTIAL}}{{/each}}"#;
