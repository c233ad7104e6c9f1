use gridwalk_core::errors::ExErrorKind;
use gridwalk_core::{validate_commands, CommandSpec, ExError, GridError, PathRequest, Point};

fn spec(direction: &str, steps: Option<i64>) -> CommandSpec {
    CommandSpec {
        direction: direction.to_string(),
        steps,
    }
}

#[test]
fn test_unknown_direction_rejected_with_index() {
    let commands = vec![spec("east", Some(1)), spec("up", Some(2))];
    let err = validate_commands(&commands).unwrap_err();
    assert_eq!(
        err,
        GridError::InvalidDirection {
            index: 1,
            token: "up".to_string()
        }
    );
    assert_eq!(err.to_string(), "command 1: invalid direction 'up'");
}

#[test]
fn test_direction_tokens_are_case_sensitive() {
    let err = validate_commands(&[spec("East", Some(1))]).unwrap_err();
    assert!(matches!(err, GridError::InvalidDirection { index: 0, .. }));
}

#[test]
fn test_negative_steps_rejected_with_index() {
    let commands = vec![
        spec("north", Some(0)),
        spec("south", Some(3)),
        spec("west", Some(-1)),
    ];
    let err = validate_commands(&commands).unwrap_err();
    assert_eq!(err, GridError::NegativeSteps { index: 2, steps: -1 });
}

#[test]
fn test_missing_steps_rejected_with_index() {
    let commands = vec![spec("north", Some(1)), spec("south", None)];
    let err = validate_commands(&commands).unwrap_err();
    assert_eq!(err, GridError::MissingSteps { index: 1 });
}

#[test]
fn test_first_bad_command_wins() {
    let commands = vec![spec("left", Some(1)), spec("east", Some(-5))];
    let err = validate_commands(&commands).unwrap_err();
    assert!(matches!(err, GridError::InvalidDirection { index: 0, .. }));
}

#[test]
fn test_validation_errors_map_to_invalid_input() {
    let request = PathRequest {
        start: Point::new(0, 0),
        commands: vec![spec("east", Some(-2))],
    };
    let ex: ExError = request.validate().unwrap_err().into();
    assert_eq!(ex.kind(), ExErrorKind::InvalidInput);
    assert_eq!(ex.code(), "ERR_INVALID_INPUT");
    assert_eq!(ex.op(), Some("validate_commands"));
    assert_eq!(ex.move_index(), Some(0));
}

#[test]
fn test_empty_command_list_is_invalid_input() {
    let request = PathRequest {
        start: Point::new(0, 0),
        commands: vec![],
    };
    let ex: ExError = request.validate().unwrap_err().into();
    assert_eq!(ex.kind(), ExErrorKind::InvalidInput);
    assert_eq!(ex.move_index(), None);
}
