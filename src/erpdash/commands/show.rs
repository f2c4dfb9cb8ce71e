use crate::commands::{bootstrap, CmdMessage, CmdResult};
use crate::error::Result;
use crate::state::{AppState, CollectionKind};

pub fn run<I: AsRef<str>>(state: &mut AppState, kind: CollectionKind, ids: &[I]) -> Result<CmdResult> {
    let seeded = bootstrap(state)?;
    let mut result = CmdResult {
        changed: seeded,
        ..Default::default()
    };

    for id in ids {
        let id = id.as_ref();
        match state.collection(kind).get_value(id)? {
            Some(record) => result.records.push(record),
            None => result.add_message(CmdMessage::warning(format!("No {} with id {}", kind, id))),
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{fixtures, MessageLevel};

    #[test]
    fn shows_records_in_request_order() {
        let mut state = fixtures::admin();
        let res = run(&mut state, CollectionKind::Servers, &["srv-3", "srv-1"]).unwrap();

        assert_eq!(res.records.len(), 2);
        assert_eq!(res.records[0]["name"], "staging-app-01");
        assert_eq!(res.records[1]["provider"], "aws");
        assert!(res.messages.is_empty());
    }

    #[test]
    fn missing_ids_warn() {
        let mut state = fixtures::admin();
        let res = run(&mut state, CollectionKind::Customers, &["cust-1", "cust-404"]).unwrap();

        assert_eq!(res.records.len(), 1);
        assert_eq!(res.messages[0].level, MessageLevel::Warning);
    }
}
