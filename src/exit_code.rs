use crate::error::HutError;

pub fn exit_code_for_error(err: &HutError) -> i32 {
    match err {
        HutError::Config(_) => 2,
        HutError::InvalidUrl(_) => 3,
        HutError::Status { .. } => 22,
        HutError::Io(_) => 23,
        HutError::Json(_) => 26,
        HutError::Http(err) => http_exit_code(err),
    }
}

fn http_exit_code(err: &reqwest::Error) -> i32 {
    if err.is_timeout() {
        return 28;
    }
    if err.is_connect() {
        return 7;
    }
    if err.is_decode() {
        return 26;
    }
    43
}

#[cfg(test)]
mod tests {
    use super::exit_code_for_error;
    use crate::error::{HutError, Step};
    use reqwest::StatusCode;

    #[test]
    fn exit_code_maps_rejected_login() {
        let err = HutError::Status {
            step: Step::Login,
            status: StatusCode::FORBIDDEN,
            url: "https://www.hut-reservation.org/api/v1/users/login".to_string(),
        };
        assert_eq!(exit_code_for_error(&err), 22);
    }

    #[test]
    fn exit_code_maps_config_and_url() {
        assert_eq!(exit_code_for_error(&HutError::Config("x".to_string())), 2);
        assert_eq!(exit_code_for_error(&HutError::InvalidUrl("x".to_string())), 3);
    }

    #[test]
    fn exit_code_maps_json() {
        let err = serde_json::from_str::<serde_json::Value>("<html>").expect_err("not json");
        assert_eq!(exit_code_for_error(&HutError::Json(err)), 26);
    }
}
