use crate::action::{Action, Outcome};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::nav::header;
use crate::state::AppState;

pub fn login(state: &mut AppState, email: &str, password: &str) -> Result<CmdResult> {
    let outcome = state.apply(Action::Login {
        email: email.trim().to_string(),
        password: password.to_string(),
    })?;
    let result = CmdResult::default().with_outcome(outcome);

    if outcome == Outcome::Rejected {
        return Ok(result.with_message(CmdMessage::error("Invalid email or password")));
    }

    let view = header(state);
    let greeting = format!(
        "Signed in as {} ({})",
        view.user_name.as_deref().unwrap_or(email),
        view.role.map(|r| r.as_str()).unwrap_or("viewer")
    );
    Ok(result
        .with_header(view)
        .with_message(CmdMessage::success(greeting)))
}

pub fn logout(state: &mut AppState) -> Result<CmdResult> {
    let outcome = state.apply(Action::Logout)?;
    let message = if outcome.changed() {
        CmdMessage::success("Signed out")
    } else {
        CmdMessage::info("Not signed in")
    };
    Ok(CmdResult::default()
        .with_outcome(outcome)
        .with_message(message))
}

pub fn whoami(state: &AppState) -> Result<CmdResult> {
    if !state.is_authenticated() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("Not signed in")));
    }
    Ok(CmdResult::default().with_header(header(state)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn login_with_demo_account() {
        let mut state = AppState::new();
        let res = login(&mut state, "admin@acme.com", "demo123").unwrap();

        assert!(res.changed);
        assert!(state.is_authenticated());
        assert_eq!(res.messages[0].level, MessageLevel::Success);
        assert!(res.messages[0].content.contains("Alex Morgan"));
        assert_eq!(
            res.header.and_then(|h| h.organization).as_deref(),
            Some("Acme Corporation")
        );
    }

    #[test]
    fn wrong_password_and_unknown_user_read_the_same() {
        let mut state = AppState::new();
        let wrong = login(&mut state, "admin@acme.com", "nope").unwrap();
        let unknown = login(&mut state, "ghost@acme.com", "demo123").unwrap();

        assert!(!wrong.changed);
        assert_eq!(wrong.messages[0].content, unknown.messages[0].content);
        assert!(wrong.has_errors());
        assert!(!state.is_authenticated());
    }

    #[test]
    fn logout_twice() {
        let mut state = AppState::new();
        login(&mut state, "sales@acme.com", "demo123").unwrap();

        assert!(logout(&mut state).unwrap().changed);
        let again = logout(&mut state).unwrap();
        assert!(!again.changed);
        assert_eq!(again.messages[0].level, MessageLevel::Info);
    }

    #[test]
    fn whoami_reports_session() {
        let mut state = AppState::new();
        assert!(whoami(&state).unwrap().header.is_none());

        login(&mut state, "devops@acme.com", "demo123").unwrap();
        let res = whoami(&state).unwrap();
        assert_eq!(
            res.header.and_then(|h| h.user_email).as_deref(),
            Some("devops@acme.com")
        );
    }
}
