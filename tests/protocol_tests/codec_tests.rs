//! Codec Tests
//!
//! Tests for building and framing commands.

use pmsbridge::protocol::{
    build_check_in, build_check_out, build_read_card, command_text, encode_command,
    CheckInRequest, CheckOutRequest, FunctionCode, ReadCardRequest, FRAME_OVERHEAD,
};
use pmsbridge::protocol::constants::{ETX, SEPARATOR, STX};
use pmsbridge::{BridgeError, Config};

fn frame(body: &[u8]) -> Vec<u8> {
    let mut bytes = vec![STX];
    bytes.extend_from_slice(body);
    bytes.push(ETX);
    bytes
}

fn validation_message(err: BridgeError) -> String {
    match err {
        BridgeError::Validation(msg) => msg,
        other => panic!("Expected validation error, got {:?}", other),
    }
}

// =============================================================================
// Check-in (G)
// =============================================================================

#[test]
fn test_check_in_reference_command() {
    let request = CheckInRequest::new("102", "Du", "2020-12-20T12:00", "2020-12-30T21:00");
    let command = build_check_in(&request, &Config::default()).unwrap();

    assert_eq!(command.function(), FunctionCode::CheckIn);
    assert_eq!(
        encode_command(&command),
        frame(b"0103G|R102|NDu|D202012201200|O202012302100")
    );
}

#[test]
fn test_check_in_custom_addresses() {
    let request = CheckInRequest::new("7", "Ana", "2021-01-05T09:30", "2021-01-06T11:00")
        .with_dest_addr("04")
        .with_src_addr("09");
    let command = build_check_in(&request, &Config::default()).unwrap();

    assert_eq!(
        encode_command(&command),
        frame(b"0409G|R7|NAna|D202101050930|O202101061100")
    );
}

#[test]
fn test_check_in_uses_config_defaults() {
    let config = Config::builder()
        .default_dest_addr("02")
        .default_src_addr("08")
        .build();
    let request = CheckInRequest::new("1", "A", "2021-01-05T09:30", "2021-01-06T11:00");
    let command = build_check_in(&request, &config).unwrap();

    assert_eq!(command.dest().to_string(), "02");
    assert_eq!(command.src().to_string(), "08");
}

#[test]
fn test_check_in_field_order() {
    let request = CheckInRequest::new("102", "Du", "2020-12-20T12:00", "2020-12-30T21:00");
    let command = build_check_in(&request, &Config::default()).unwrap();

    let tags: Vec<u8> = command.fields().iter().map(|f| f.tag()).collect();
    assert_eq!(tags, b"RNDO".to_vec());
}

#[test]
fn test_check_in_missing_room() {
    let request = CheckInRequest {
        room_number: None,
        ..CheckInRequest::new("102", "Du", "2020-12-20T12:00", "2020-12-30T21:00")
    };
    let msg = validation_message(build_check_in(&request, &Config::default()).unwrap_err());

    assert!(msg.contains("room"));
    assert!(!msg.contains("guest name"));
}

#[test]
fn test_check_in_empty_name_is_missing() {
    let request = CheckInRequest::new("102", "", "2020-12-20T12:00", "2020-12-30T21:00");
    let msg = validation_message(build_check_in(&request, &Config::default()).unwrap_err());

    assert!(msg.contains("guest name"));
}

#[test]
fn test_check_in_bad_date_format() {
    let request = CheckInRequest::new("102", "Du", "20/12/2020 12:00", "2020-12-30");
    let msg = validation_message(build_check_in(&request, &Config::default()).unwrap_err());

    assert!(msg.contains("check-in date"));
    assert!(msg.contains("check-out date"));
    assert!(!msg.contains("room"));
}

#[test]
fn test_check_in_reports_every_problem() {
    let msg = validation_message(
        build_check_in(&CheckInRequest::default(), &Config::default()).unwrap_err(),
    );

    for part in ["room", "guest name", "check-in date", "check-out date"] {
        assert!(msg.contains(part), "missing {:?} in {:?}", part, msg);
    }
}

#[test]
fn test_check_in_reports_address_with_field_problems() {
    let request = CheckInRequest {
        room_number: None,
        ..CheckInRequest::new("102", "Du", "2020-12-20T12:00", "2020-12-30T21:00")
    }
    .with_dest_addr("1")
    .with_src_addr("x3");
    let msg = validation_message(build_check_in(&request, &Config::default()).unwrap_err());

    assert!(msg.contains("destination"), "{:?}", msg);
    assert!(msg.contains("source"), "{:?}", msg);
    assert!(msg.contains("room number (R)"), "{:?}", msg);
    assert!(!msg.contains("guest name"), "{:?}", msg);
}

#[test]
fn test_check_in_non_ascii_name_rejected() {
    let request = CheckInRequest::new("102", "Müller", "2020-12-20T12:00", "2020-12-30T21:00");
    let err = build_check_in(&request, &Config::default()).unwrap_err();

    assert!(err.is_validation());
    assert!(err.to_string().contains("non-ASCII"));
}

#[test]
fn test_invalid_address_rejected() {
    for addr in ["1", "001", "ab", "0x"] {
        let request = CheckInRequest::new("102", "Du", "2020-12-20T12:00", "2020-12-30T21:00")
            .with_dest_addr(addr);
        let msg = validation_message(build_check_in(&request, &Config::default()).unwrap_err());
        assert!(msg.contains("destination"), "{:?}", msg);
    }
}

// =============================================================================
// Check-out (B)
// =============================================================================

#[test]
fn test_check_out_database_only() {
    let request = CheckOutRequest::new("101");
    let command = build_check_out(&request, &Config::default()).unwrap();

    assert_eq!(encode_command(&command), frame(b"0003B|R101"));
}

#[test]
fn test_check_out_ignores_dest_without_cancel() {
    let request = CheckOutRequest::new("101").with_dest_addr("05");
    let command = build_check_out(&request, &Config::default()).unwrap();

    assert_eq!(command.dest().to_string(), "00");
    assert_eq!(encode_command(&command), frame(b"0003B|R101"));
}

#[test]
fn test_check_out_ignores_invalid_dest_without_cancel() {
    // The caller's destination is never consulted for a database-only checkout
    let request = CheckOutRequest::new("101").with_dest_addr("bogus");
    assert!(build_check_out(&request, &Config::default()).is_ok());
}

#[test]
fn test_check_out_cancel_card_uses_dest() {
    let request = CheckOutRequest::new("101")
        .with_cancel_card(true)
        .with_dest_addr("05");
    let command = build_check_out(&request, &Config::default()).unwrap();

    assert_eq!(command.dest().to_string(), "05");
    assert_eq!(encode_command(&command), frame(b"0503B|R101"));
}

#[test]
fn test_check_out_cancel_card_default_dest() {
    let request = CheckOutRequest::new("101").with_cancel_card(true);
    let command = build_check_out(&request, &Config::default()).unwrap();

    assert_eq!(command.dest().to_string(), "01");
}

#[test]
fn test_check_out_with_guest_name() {
    let request = CheckOutRequest::new("101").with_guest_name("Du");
    let command = build_check_out(&request, &Config::default()).unwrap();

    assert_eq!(encode_command(&command), frame(b"0003B|R101|NDu"));
}

#[test]
fn test_check_out_empty_guest_name_omitted() {
    let request = CheckOutRequest::new("101").with_guest_name("");
    let command = build_check_out(&request, &Config::default()).unwrap();

    assert_eq!(command.fields().len(), 1);
}

#[test]
fn test_check_out_missing_room() {
    let request = CheckOutRequest::default().with_guest_name("Du");
    let msg = validation_message(build_check_out(&request, &Config::default()).unwrap_err());

    assert!(msg.contains("room number (R)"));
}

// =============================================================================
// Card read (E)
// =============================================================================

#[test]
fn test_read_card_defaults() {
    let command = build_read_card(&ReadCardRequest::new(), &Config::default()).unwrap();
    let encoded = encode_command(&command);

    assert_eq!(encoded, frame(b"0103E"));
    assert_eq!(encoded.len(), FRAME_OVERHEAD);
    assert!(!encoded.contains(&SEPARATOR));
}

#[test]
fn test_read_card_custom_addresses() {
    let request = ReadCardRequest::new().with_dest_addr("02").with_src_addr("04");
    let command = build_read_card(&request, &Config::default()).unwrap();

    assert_eq!(encode_command(&command), frame(b"0204E"));
}

// =============================================================================
// Framing
// =============================================================================

#[test]
fn test_frame_markers_always_present() {
    let commands = vec![
        build_read_card(&ReadCardRequest::new(), &Config::default()).unwrap(),
        build_check_out(&CheckOutRequest::new("9"), &Config::default()).unwrap(),
    ];

    for command in commands {
        let encoded = encode_command(&command);
        assert_eq!(encoded.first(), Some(&STX));
        assert_eq!(encoded.last(), Some(&ETX));
    }
}

#[test]
fn test_separator_in_value_is_passed_through() {
    let request = CheckOutRequest::new("1|N2");
    let command = build_check_out(&request, &Config::default()).unwrap();

    assert_eq!(encode_command(&command), frame(b"0003B|R1|N2"));
}

#[test]
fn test_command_text_keeps_control_bytes() {
    let command = build_read_card(&ReadCardRequest::new(), &Config::default()).unwrap();
    let text = command_text(&encode_command(&command));

    assert_eq!(text, "\u{2}0103E\u{3}");
}
