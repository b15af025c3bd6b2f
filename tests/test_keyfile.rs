//! Key-file text format integration tests (§6.4): Scheme A/B
//! format/parse round trips and the strict `FrameOrder` parser's
//! rejection of malformed or non-bijective input.

use medicipher_core::keyfile::{format_scheme_a, format_scheme_b, parse_frame_order, parse_scheme_a, parse_scheme_b, CosKey, FrameOrder, FyKey};

#[test]
fn scheme_a_key_file_round_trips() {
    let keys: Vec<FyKey> = vec![
        FyKey::new("1".repeat(128)).unwrap(),
        FyKey::new("2".repeat(128)).unwrap(),
        FyKey::new("3".repeat(128)).unwrap(),
    ];

    let content = format_scheme_a(&keys);
    assert_eq!(content.lines().count(), 3);

    let parsed = parse_scheme_a(&content).unwrap();
    assert_eq!(parsed.len(), 3);
    for (original, got) in keys.iter().zip(parsed.iter()) {
        assert_eq!(original.as_str(), got.as_str());
    }
}

#[test]
fn scheme_b_key_file_round_trips_with_frame_order() {
    let seeds = vec![
        CosKey { perm_seed: 0.123, diff_seed: 0.456 },
        CosKey { perm_seed: 0.789, diff_seed: 0.321 },
    ];
    let order = FrameOrder::new(vec![1, 0]).unwrap();

    let content = format_scheme_b(&seeds, &order);
    assert_eq!(content.lines().count(), 2 * seeds.len() + 1);

    let (parsed_seeds, parsed_order) = parse_scheme_b(&content).unwrap();
    assert_eq!(parsed_seeds.len(), 2);
    assert_eq!(parsed_order.as_slice(), order.as_slice());
    for (original, got) in seeds.iter().zip(parsed_seeds.iter()) {
        assert!((original.perm_seed - got.perm_seed).abs() < 1e-12);
        assert!((original.diff_seed - got.diff_seed).abs() < 1e-12);
    }
}

#[test]
fn frame_order_parser_accepts_well_formed_literal() {
    let order = parse_frame_order("[3, 0, 2, 1]").unwrap();
    assert_eq!(order.as_slice(), &[3, 0, 2, 1]);
}

#[test]
fn frame_order_parser_rejects_injection_attempt() {
    assert!(parse_frame_order("[__import__('os').system('echo pwned')]").is_err());
}

#[test]
fn frame_order_parser_rejects_negative_numbers() {
    assert!(parse_frame_order("[-1, 0, 1]").is_err());
}

#[test]
fn frame_order_parser_rejects_non_bijective_list() {
    assert!(parse_frame_order("[0, 0, 1]").is_err());
}

#[test]
fn frame_order_parser_rejects_missing_brackets() {
    assert!(parse_frame_order("0, 1, 2").is_err());
}
