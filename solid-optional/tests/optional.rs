use insta::assert_debug_snapshot;

use solid_optional::{Error, Optional};

#[test]
fn test_debug_present() {
    assert_debug_snapshot!(Optional::present(5), @r"
    Present(
        5,
    )
    ");
}

#[test]
fn test_debug_absent() {
    assert_debug_snapshot!(Optional::<i32>::absent(), @"Absent");
}

#[test]
fn test_error_message() {
    assert_eq!(Error::AbsentValue.to_string(), "absent value accessed");
}

#[test]
fn test_serialize_like_option() {
    assert_eq!(ron::to_string(&Optional::present(5)).unwrap(), "Some(5)");
    assert_eq!(ron::to_string(&Optional::<i32>::absent()).unwrap(), "None");
}

#[test]
fn test_deserialize_like_option() {
    let present: Optional<i32> = ron::from_str("Some(5)").unwrap();
    let absent: Optional<i32> = ron::from_str("None").unwrap();
    assert_eq!(present, Optional::present(5));
    assert_eq!(absent, Optional::absent());
}
