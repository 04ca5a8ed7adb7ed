//! Integration tests for formwright

use formwright::{
    Action, Answers, FieldId, FieldKind, FieldUpdate, FormState, Mode, ModeKind, Rejection,
    SchemaError, Session, TestHost, ValidationError, export_schema,
};
use pretty_assertions::assert_eq;

fn session_with(fields: Vec<formwright::Field>) -> Session<TestHost> {
    Session::new(FormState::with_fields(fields).unwrap(), TestHost::new())
}

fn id(s: &str) -> FieldId {
    FieldId::new(s)
}

fn answer(session: &mut Session<TestHost>, field: &str, value: &str) {
    session
        .dispatch(Action::SetAnswer {
            id: id(field),
            value: value.to_string(),
        })
        .unwrap();
}

fn import(session: &mut Session<TestHost>, text: &str) -> Result<(), Rejection> {
    if session.state().mode().kind() != ModeKind::Import {
        session.dispatch(Action::OpenImport).unwrap();
    }
    session
        .dispatch(Action::EditImportText(text.to_string()))
        .unwrap();
    session.dispatch(Action::Import)
}

#[test]
fn test_empty_label_publish() {
    let mut session = Session::new(FormState::new(), TestHost::new());
    session.dispatch(Action::AddField(FieldKind::Text)).unwrap();
    let blank = session.state().selected().cloned().unwrap();

    session.dispatch(Action::OpenPreview).unwrap();
    let err = session.dispatch(Action::Publish).unwrap_err();
    assert!(matches!(err, Rejection::Publish(_)));
    assert_eq!(session.state().mode(), &Mode::Preview);
    assert_eq!(
        session.host().last_alert(),
        Some("Every field needs a label before publishing.")
    );

    session
        .dispatch(Action::UpdateField {
            id: blank,
            update: FieldUpdate::Label("Nickname".into()),
        })
        .unwrap();
    session.dispatch(Action::Publish).unwrap();

    let Mode::Schema(published) = session.state().mode() else {
        panic!("expected schema mode");
    };
    let labels: Vec<&str> = published
        .questions
        .iter()
        .map(|q| q.label.as_str())
        .collect();
    assert_eq!(labels, vec!["Full Name", "Nickname"]);
}

#[test]
fn test_import_rejections() {
    let mut session = Session::new(FormState::new(), TestHost::new());
    let before = session.state().fields().to_vec();

    let err = import(&mut session, "{}").unwrap_err();
    assert!(matches!(err, Rejection::Import(SchemaError::NotASequence)));
    assert_eq!(session.host().last_alert(), Some("Invalid schema JSON."));

    let err = import(&mut session, "[]").unwrap_err();
    assert!(matches!(err, Rejection::Import(SchemaError::Empty)));
    assert_eq!(session.host().last_alert(), Some("Schema cannot be empty"));

    let err = import(&mut session, "not json").unwrap_err();
    assert!(matches!(err, Rejection::Import(SchemaError::InvalidJson(_))));

    assert_eq!(session.state().mode().kind(), ModeKind::Import);
    assert_eq!(session.state().fields(), before.as_slice());
}

#[test]
fn test_import_replaces_fields_and_starts_taking() {
    let mut session = Session::new(FormState::new(), TestHost::new());
    let fields = example_forms::contact_form();
    let json = export_schema(&fields).unwrap();

    import(&mut session, &json).unwrap();

    let state = session.state();
    assert_eq!(state.fields(), fields.as_slice());
    assert_eq!(state.selected(), Some(&id("name")));
    assert_eq!(state.mode().kind(), ModeKind::Take);
    assert!(state.answers().unwrap().is_empty());
    assert!(state.errors().unwrap().is_empty());
    assert!(!state.attempted_submit());
    assert!(state.submitted().is_none());
}

#[test]
fn test_import_after_results_resets_session() {
    let mut session = session_with(example_forms::contact_form());
    let json = export_schema(session.state().fields()).unwrap();
    import(&mut session, &json).unwrap();
    answer(&mut session, "name", "Ada");
    answer(&mut session, "email", "ada@example.com");
    session.dispatch(Action::Submit).unwrap();
    assert!(session.state().submitted().is_some());

    session.dispatch(Action::OpenEditor).unwrap();
    import(&mut session, &json).unwrap();
    assert!(session.state().submitted().is_none());
    assert!(session.state().answers().unwrap().is_empty());
}

#[test]
fn test_submit_with_blank_required_field() {
    let mut session = session_with(example_forms::contact_form());
    let json = export_schema(session.state().fields()).unwrap();
    import(&mut session, &json).unwrap();

    answer(&mut session, "name", "Ada Lovelace");
    let err = session.dispatch(Action::Submit).unwrap_err();
    assert!(matches!(err, Rejection::SubmitRejected { invalid: 1 }));

    let state = session.state();
    assert_eq!(state.mode().kind(), ModeKind::Take);
    assert!(state.attempted_submit());
    let errors = state.errors().unwrap();
    assert_eq!(errors.ids().collect::<Vec<_>>(), vec![&id("email")]);
    assert_eq!(errors.get(&id("email")), Some(&ValidationError::Required));

    answer(&mut session, "email", "ada@");
    assert_eq!(
        session.state().errors().unwrap().get(&id("email")),
        Some(&ValidationError::InvalidEmail)
    );

    answer(&mut session, "email", "ada@example.com");
    assert!(session.state().errors().unwrap().is_empty());

    session.dispatch(Action::Submit).unwrap();
    let state = session.state();
    assert_eq!(state.mode().kind(), ModeKind::Results);
    assert!(state.errors().unwrap().is_empty());
    let expected: Answers = [("name", "Ada Lovelace"), ("email", "ada@example.com")]
        .into_iter()
        .collect();
    assert_eq!(state.submitted(), Some(&expected));
    assert_eq!(state.answers(), Some(&expected));
}

#[test]
fn test_job_application_number_fields() {
    let mut session = session_with(example_forms::job_application());
    let json = export_schema(session.state().fields()).unwrap();
    import(&mut session, &json).unwrap();

    answer(&mut session, "applicant", "Grace");
    answer(&mut session, "contact", "grace@navy.mil");
    answer(&mut session, "years", "forty");
    answer(&mut session, "salary", "");
    assert!(session.dispatch(Action::Submit).is_err());
    assert_eq!(
        session.state().errors().unwrap().get(&id("years")),
        Some(&ValidationError::InvalidNumber)
    );

    answer(&mut session, "years", " 40 ");
    session.dispatch(Action::Submit).unwrap();
    assert_eq!(session.state().mode().kind(), ModeKind::Results);

    session.dispatch(Action::BackToForm).unwrap();
    assert_eq!(
        session.state().answers().unwrap().get(&id("years")),
        Some(" 40 ")
    );
}

#[test]
fn test_reorder_through_session() {
    let mut session = session_with(example_forms::contact_form());
    session
        .dispatch(Action::Reorder {
            from: id("phone"),
            to: id("name"),
        })
        .unwrap();
    let order: Vec<&str> = session
        .state()
        .fields()
        .iter()
        .map(|f| f.id().as_str())
        .collect();
    assert_eq!(order, vec!["phone", "name", "email"]);
}

#[test]
fn test_export_round_trip_through_clipboard() -> anyhow::Result<()> {
    let mut session = session_with(example_forms::job_application());
    session.dispatch(Action::ExportSchema)?;
    let exported = session.host().clipboard().map(str::to_string).unwrap();

    let mut other = Session::new(FormState::new(), TestHost::new());
    import(&mut other, &exported)?;
    assert_eq!(other.state().fields(), session.state().fields());
    Ok(())
}
