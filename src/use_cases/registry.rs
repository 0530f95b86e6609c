use std::collections::HashMap;

use chrono::SecondsFormat;

use crate::domain::entities::{Participant, Session};
use crate::domain::ids;
use crate::domain::ports::Clock;
use crate::interface_adapters::protocol::{
    AddParticipantParams, AddParticipantResult, CreateSessionParams, CreateSessionResult,
    DeleteParticipantParams, DeleteParticipantResult, DeleteSessionParams, DeleteSessionResult,
    GetParticipantParams, GetParticipantResult, GetParticipantsParams, GetParticipantsResult,
    GetSessionParams, GetSessionResult, UpdateParticipantParams, UpdateParticipantResult,
};

// A registered session together with its participant set.
struct SessionEntry {
    session: Session,
    participants: HashMap<String, Participant>,
}

// In-memory directory of live view sessions and their participants.
//
// Expected failures (validation, missing entities) are returned as data
// inside each operation's result record; the registry has no internal
// fault path. Callers serialize access externally, so operations take
// plain &self / &mut self.
pub struct SessionRegistry<C> {
    clock: C,
    sessions: HashMap<String, SessionEntry>,
}

impl<C: Clock> SessionRegistry<C> {
    // Create an empty registry using the provided time source.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            sessions: HashMap::new(),
        }
    }

    // Create a new live view session with a fresh id and timestamp.
    pub fn create_session(&mut self, params: CreateSessionParams) -> CreateSessionResult {
        let errors = params.check();
        if !errors.is_empty() {
            return CreateSessionResult {
                session: None,
                errors,
            };
        }

        let id = self.unused_session_id();
        let session = Session {
            name: params.name,
            id: id.clone(),
            creation_date_time: self.timestamp(),
        };
        self.sessions.insert(
            id,
            SessionEntry {
                session: session.clone(),
                participants: HashMap::new(),
            },
        );

        CreateSessionResult {
            session: Some(session),
            errors: Vec::new(),
        }
    }

    // Retrieve an existing session. An absent session in a clean result
    // means no such session is registered.
    pub fn get_session(&self, params: GetSessionParams) -> GetSessionResult {
        let errors = params.check();
        if !errors.is_empty() {
            return GetSessionResult {
                session: None,
                errors,
            };
        }

        let session = self
            .sessions
            .get(&params.id)
            .map(|entry| entry.session.clone());

        GetSessionResult {
            session,
            errors: Vec::new(),
        }
    }

    // Delete an existing session. Removal cascades to its participants.
    pub fn delete_session(&mut self, params: DeleteSessionParams) -> DeleteSessionResult {
        let errors = params.check();
        if !errors.is_empty() {
            return DeleteSessionResult {
                session: None,
                errors,
            };
        }

        let session = self.sessions.remove(&params.id).map(|entry| entry.session);

        DeleteSessionResult {
            session,
            errors: Vec::new(),
        }
    }

    // Add a new participant to an existing session.
    pub fn add_participant(&mut self, params: AddParticipantParams) -> AddParticipantResult {
        let errors = params.check();
        if !errors.is_empty() {
            return AddParticipantResult {
                participant: None,
                errors,
            };
        }

        let created_at = self.timestamp();
        let Some(entry) = self.sessions.get_mut(&params.session_id) else {
            return AddParticipantResult {
                participant: None,
                errors: vec![session_missing(&params.session_id)],
            };
        };

        let id = unused_participant_id(&entry.participants);
        let participant = Participant {
            name: params.name,
            id: id.clone(),
            session_id: params.session_id,
            creation_date_time: created_at,
        };
        entry.participants.insert(id, participant.clone());

        AddParticipantResult {
            participant: Some(participant),
            errors: Vec::new(),
        }
    }

    // Retrieve a participant of an existing session. An unknown
    // participant under a known session is a quiet empty result.
    pub fn get_participant(&self, params: GetParticipantParams) -> GetParticipantResult {
        let errors = params.check();
        if !errors.is_empty() {
            return GetParticipantResult {
                participant: None,
                errors,
            };
        }

        let Some(entry) = self.sessions.get(&params.session_id) else {
            return GetParticipantResult {
                participant: None,
                errors: vec![session_missing(&params.session_id)],
            };
        };

        GetParticipantResult {
            participant: entry.participants.get(&params.participant_id).cloned(),
            errors: Vec::new(),
        }
    }

    // Rename a participant of an existing session. Only the name is
    // mutable; id, session id and creation timestamp never change.
    pub fn update_participant(
        &mut self,
        params: UpdateParticipantParams,
    ) -> UpdateParticipantResult {
        let errors = params.check();
        if !errors.is_empty() {
            return UpdateParticipantResult {
                participant: None,
                errors,
            };
        }

        let Some(entry) = self.sessions.get_mut(&params.session_id) else {
            return UpdateParticipantResult {
                participant: None,
                errors: vec![session_missing(&params.session_id)],
            };
        };

        let participant = entry
            .participants
            .get_mut(&params.participant_id)
            .map(|participant| {
                participant.name = params.name;
                participant.clone()
            });

        UpdateParticipantResult {
            participant,
            errors: Vec::new(),
        }
    }

    // Remove a participant from an existing session. An unknown
    // participant under a known session is a quiet empty result.
    pub fn delete_participant(
        &mut self,
        params: DeleteParticipantParams,
    ) -> DeleteParticipantResult {
        let errors = params.check();
        if !errors.is_empty() {
            return DeleteParticipantResult {
                participant: None,
                errors,
            };
        }

        let Some(entry) = self.sessions.get_mut(&params.session_id) else {
            return DeleteParticipantResult {
                participant: None,
                errors: vec![session_missing(&params.session_id)],
            };
        };

        DeleteParticipantResult {
            participant: entry.participants.remove(&params.participant_id),
            errors: Vec::new(),
        }
    }

    // List every participant of an existing session, in no particular order.
    pub fn get_participants(&self, params: GetParticipantsParams) -> GetParticipantsResult {
        let errors = params.check();
        if !errors.is_empty() {
            return GetParticipantsResult {
                participants: Vec::new(),
                errors,
            };
        }

        let Some(entry) = self.sessions.get(&params.session_id) else {
            return GetParticipantsResult {
                participants: Vec::new(),
                errors: vec![session_missing(&params.session_id)],
            };
        };

        GetParticipantsResult {
            participants: entry.participants.values().cloned().collect(),
            errors: Vec::new(),
        }
    }

    // Generated ids make collisions negligible; regenerate on the off
    // chance one is already live.
    fn unused_session_id(&self) -> String {
        loop {
            let id = ids::generate_entity_id();
            if !self.sessions.contains_key(&id) {
                return id;
            }
        }
    }

    fn timestamp(&self) -> String {
        self.clock.now().to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

fn unused_participant_id(participants: &HashMap<String, Participant>) -> String {
    loop {
        let id = ids::generate_entity_id();
        if !participants.contains_key(&id) {
            return id;
        }
    }
}

fn session_missing(session_id: &str) -> String {
    format!("session {session_id} does not exist")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    // Fixed time source so timestamp assertions are deterministic.
    struct FixedClock {
        now: i64,
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            DateTime::from_timestamp(self.now, 0).expect("valid test timestamp")
        }
    }

    fn registry() -> SessionRegistry<FixedClock> {
        SessionRegistry::new(FixedClock { now: 1_700_000_000 })
    }

    fn create_session(registry: &mut SessionRegistry<FixedClock>, name: &str) -> Session {
        registry
            .create_session(CreateSessionParams {
                name: name.to_string(),
            })
            .session
            .expect("expected session to be created")
    }

    fn add_participant(
        registry: &mut SessionRegistry<FixedClock>,
        session_id: &str,
        name: &str,
    ) -> Participant {
        registry
            .add_participant(AddParticipantParams {
                session_id: session_id.to_string(),
                name: name.to_string(),
            })
            .participant
            .expect("expected participant to be added")
    }

    #[test]
    fn when_name_is_valid_then_session_is_created_and_retrievable() {
        let mut registry = registry();

        let created = create_session(&mut registry, "standup");

        assert_eq!(created.name, "standup");
        assert_eq!(created.id.len(), ids::ID_LEN);
        assert_eq!(created.creation_date_time, "2023-11-14T22:13:20Z");

        let result = registry.get_session(GetSessionParams {
            id: created.id.clone(),
        });
        let found = result.session.expect("expected session to be found");
        assert_eq!(found.id, created.id);
        assert_eq!(found.name, "standup");
        assert!(result.errors.is_empty());
    }

    #[test]
    fn when_name_is_blank_then_create_session_returns_errors_and_no_session() {
        let mut registry = registry();

        for name in ["", "   ", "\t\n"] {
            let result = registry.create_session(CreateSessionParams {
                name: name.to_string(),
            });

            assert!(result.session.is_none());
            assert_eq!(result.errors, vec!["name must not be blank".to_string()]);
        }
    }

    #[test]
    fn when_name_has_surrounding_whitespace_then_it_is_stored_as_submitted() {
        let mut registry = registry();

        let created = create_session(&mut registry, "  standup  ");

        assert_eq!(created.name, "  standup  ");
    }

    #[test]
    fn when_sessions_are_created_then_ids_are_unique() {
        let mut registry = registry();
        let mut seen = std::collections::HashSet::new();

        for _ in 0..100 {
            let created = create_session(&mut registry, "standup");
            assert!(seen.insert(created.id));
        }
    }

    #[test]
    fn when_id_is_malformed_then_get_session_returns_validation_error() {
        let registry = registry();

        for id in ["", "short", "waytoolongid", "abc!!abc!!"] {
            let result = registry.get_session(GetSessionParams { id: id.to_string() });

            assert!(result.session.is_none());
            assert_eq!(result.errors, vec!["id must be a valid id".to_string()]);
        }
    }

    #[test]
    fn when_id_is_well_formed_but_unknown_then_get_session_reports_quiet_miss() {
        let registry = registry();

        let result = registry.get_session(GetSessionParams {
            id: "abcdef1234".to_string(),
        });

        assert!(result.session.is_none());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn when_id_is_malformed_then_delete_session_returns_validation_error() {
        let mut registry = registry();

        let result = registry.delete_session(DeleteSessionParams {
            id: "bad".to_string(),
        });

        assert!(result.session.is_none());
        assert_eq!(result.errors, vec!["id must be a valid id".to_string()]);
    }

    #[test]
    fn when_session_is_deleted_then_it_is_gone_and_participants_are_unreachable() {
        let mut registry = registry();
        let session = create_session(&mut registry, "standup");
        add_participant(&mut registry, &session.id, "alice");

        let deleted = registry.delete_session(DeleteSessionParams {
            id: session.id.clone(),
        });
        assert_eq!(
            deleted.session.expect("expected deleted session").id,
            session.id
        );

        let missing = registry.get_session(GetSessionParams {
            id: session.id.clone(),
        });
        assert!(missing.session.is_none());
        assert!(missing.errors.is_empty());

        let participants = registry.get_participants(GetParticipantsParams {
            session_id: session.id.clone(),
        });
        assert!(participants.participants.is_empty());
        assert_eq!(
            participants.errors,
            vec![format!("session {} does not exist", session.id)]
        );
    }

    #[test]
    fn when_session_is_deleted_twice_then_second_delete_reports_quiet_miss() {
        let mut registry = registry();
        let session = create_session(&mut registry, "standup");

        registry.delete_session(DeleteSessionParams {
            id: session.id.clone(),
        });
        let second = registry.delete_session(DeleteSessionParams {
            id: session.id.clone(),
        });

        assert!(second.session.is_none());
        assert!(second.errors.is_empty());
    }

    #[test]
    fn when_session_id_is_unknown_then_add_participant_reports_missing_session() {
        let mut registry = registry();

        let result = registry.add_participant(AddParticipantParams {
            session_id: "abcdef1234".to_string(),
            name: "alice".to_string(),
        });

        assert!(result.participant.is_none());
        assert_eq!(
            result.errors,
            vec!["session abcdef1234 does not exist".to_string()]
        );
    }

    #[test]
    fn when_multiple_fields_are_invalid_then_all_errors_are_collected() {
        let mut registry = registry();

        let result = registry.add_participant(AddParticipantParams {
            session_id: "bad".to_string(),
            name: "  ".to_string(),
        });

        assert!(result.participant.is_none());
        assert_eq!(
            result.errors,
            vec![
                "sessionId must be a valid id".to_string(),
                "name must not be blank".to_string(),
            ]
        );
    }

    #[test]
    fn when_participant_is_added_then_it_carries_session_id_and_timestamp() {
        let mut registry = registry();
        let session = create_session(&mut registry, "standup");

        let participant = add_participant(&mut registry, &session.id, "alice");

        assert_eq!(participant.name, "alice");
        assert_eq!(participant.session_id, session.id);
        assert_eq!(participant.id.len(), ids::ID_LEN);
        assert_eq!(participant.creation_date_time, "2023-11-14T22:13:20Z");
    }

    #[test]
    fn when_participants_are_added_then_get_participants_returns_each_once() {
        let mut registry = registry();
        let session = create_session(&mut registry, "standup");
        let names = ["alice", "bob", "carol"];
        for name in names {
            add_participant(&mut registry, &session.id, name);
        }

        let result = registry.get_participants(GetParticipantsParams {
            session_id: session.id.clone(),
        });

        assert!(result.errors.is_empty());
        assert_eq!(result.participants.len(), names.len());

        let ids: std::collections::HashSet<_> = result
            .participants
            .iter()
            .map(|participant| participant.id.clone())
            .collect();
        assert_eq!(ids.len(), names.len());

        let mut returned: Vec<_> = result
            .participants
            .iter()
            .map(|participant| participant.name.as_str())
            .collect();
        returned.sort_unstable();
        assert_eq!(returned, names);
    }

    #[test]
    fn when_session_has_no_participants_then_get_participants_returns_empty_list() {
        let mut registry = registry();
        let session = create_session(&mut registry, "standup");

        let result = registry.get_participants(GetParticipantsParams {
            session_id: session.id,
        });

        assert!(result.participants.is_empty());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn when_participant_is_updated_then_only_name_changes() {
        let mut registry = registry();
        let session = create_session(&mut registry, "standup");
        let participant = add_participant(&mut registry, &session.id, "alice");

        // Advance the clock to prove the creation timestamp is immutable.
        registry.clock.now = 1_700_009_999;

        let result = registry.update_participant(UpdateParticipantParams {
            session_id: session.id.clone(),
            participant_id: participant.id.clone(),
            name: "alice2".to_string(),
        });

        let updated = result.participant.expect("expected updated participant");
        assert_eq!(updated.name, "alice2");
        assert_eq!(updated.id, participant.id);
        assert_eq!(updated.session_id, participant.session_id);
        assert_eq!(updated.creation_date_time, participant.creation_date_time);

        let fetched = registry
            .get_participant(GetParticipantParams {
                session_id: session.id,
                participant_id: participant.id,
            })
            .participant
            .expect("expected participant to be found");
        assert_eq!(fetched.name, "alice2");
    }

    #[test]
    fn when_participant_is_missing_then_update_reports_quiet_miss() {
        let mut registry = registry();
        let session = create_session(&mut registry, "standup");

        let result = registry.update_participant(UpdateParticipantParams {
            session_id: session.id,
            participant_id: "abcdef1234".to_string(),
            name: "alice2".to_string(),
        });

        assert!(result.participant.is_none());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn when_participant_is_missing_then_get_and_delete_report_quiet_miss() {
        let mut registry = registry();
        let session = create_session(&mut registry, "standup");

        let get = registry.get_participant(GetParticipantParams {
            session_id: session.id.clone(),
            participant_id: "abcdef1234".to_string(),
        });
        assert!(get.participant.is_none());
        assert!(get.errors.is_empty());

        let delete = registry.delete_participant(DeleteParticipantParams {
            session_id: session.id,
            participant_id: "abcdef1234".to_string(),
        });
        assert!(delete.participant.is_none());
        assert!(delete.errors.is_empty());
    }

    #[test]
    fn when_session_is_unknown_then_participant_operations_report_missing_session() {
        let mut registry = registry();
        let expected = vec!["session abcdef1234 does not exist".to_string()];

        let get = registry.get_participant(GetParticipantParams {
            session_id: "abcdef1234".to_string(),
            participant_id: "abcdef1234".to_string(),
        });
        assert_eq!(get.errors, expected);

        let update = registry.update_participant(UpdateParticipantParams {
            session_id: "abcdef1234".to_string(),
            participant_id: "abcdef1234".to_string(),
            name: "alice".to_string(),
        });
        assert_eq!(update.errors, expected);

        let delete = registry.delete_participant(DeleteParticipantParams {
            session_id: "abcdef1234".to_string(),
            participant_id: "abcdef1234".to_string(),
        });
        assert_eq!(delete.errors, expected);

        let list = registry.get_participants(GetParticipantsParams {
            session_id: "abcdef1234".to_string(),
        });
        assert_eq!(list.errors, expected);
    }

    #[test]
    fn when_participant_id_is_malformed_then_lookup_returns_validation_error() {
        let mut registry = registry();
        let session = create_session(&mut registry, "standup");

        let result = registry.get_participant(GetParticipantParams {
            session_id: session.id,
            participant_id: "nope".to_string(),
        });

        assert!(result.participant.is_none());
        assert_eq!(
            result.errors,
            vec!["participantId must be a valid id".to_string()]
        );
    }

    #[test]
    fn when_participant_is_deleted_then_it_is_removed_from_the_session() {
        let mut registry = registry();
        let session = create_session(&mut registry, "standup");
        let participant = add_participant(&mut registry, &session.id, "alice");

        let deleted = registry.delete_participant(DeleteParticipantParams {
            session_id: session.id.clone(),
            participant_id: participant.id.clone(),
        });
        assert_eq!(
            deleted.participant.expect("expected deleted participant").id,
            participant.id
        );

        let result = registry.get_participant(GetParticipantParams {
            session_id: session.id,
            participant_id: participant.id,
        });
        assert!(result.participant.is_none());
        assert!(result.errors.is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn when_participants_are_added_concurrently_then_each_is_registered_once() {
        let registry = Arc::new(Mutex::new(registry()));
        let session = {
            let mut guard = registry.lock().await;
            create_session(&mut guard, "standup")
        };

        let mut handles = Vec::new();
        for index in 0..16 {
            let registry = Arc::clone(&registry);
            let session_id = session.id.clone();
            handles.push(tokio::spawn(async move {
                let mut guard = registry.lock().await;
                guard
                    .add_participant(AddParticipantParams {
                        session_id,
                        name: format!("participant-{index}"),
                    })
                    .participant
                    .expect("expected participant to be added")
            }));
        }

        let mut ids = std::collections::HashSet::new();
        for handle in handles {
            let participant = handle.await.expect("expected task to finish");
            assert!(ids.insert(participant.id));
        }

        let guard = registry.lock().await;
        let result = guard.get_participants(GetParticipantsParams {
            session_id: session.id,
        });
        assert_eq!(result.participants.len(), 16);
    }
}
