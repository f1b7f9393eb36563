use super::*;
use pretty_assertions::assert_eq;

#[test]
fn add_project_keeps_newest_first() {
    let mut state = state();

    run_silent(
        &mut state,
        AppAction::AddProject(project("p1", "text_translate", ProjectStatus::Draft)),
    );
    run_silent(
        &mut state,
        AppAction::AddProject(project("p2", "video_dubbing", ProjectStatus::Draft)),
    );

    assert_eq!(state.projects.len(), 2);
    assert_eq!(state.projects[0].id, "p2");
    assert_eq!(state.projects[1].id, "p1");
}

#[test]
fn update_project_merges_into_the_matching_entry_only() {
    let mut state = state();
    run_silent(
        &mut state,
        AppAction::AddProject(project("p1", "text_translate", ProjectStatus::Draft)),
    );
    run_silent(
        &mut state,
        AppAction::AddProject(project("p2", "video_dubbing", ProjectStatus::Draft)),
    );

    run_silent(
        &mut state,
        AppAction::UpdateProject {
            id: "p1".to_string(),
            patch: ProjectPatch {
                status: Some(ProjectStatus::Completed),
                updated_at_ms: Some(2_000),
                ..ProjectPatch::default()
            },
        },
    );

    let updated = state.project("p1").expect("p1");
    assert_eq!(updated.status, ProjectStatus::Completed);
    assert_eq!(updated.updated_at_ms, 2_000);
    // Untouched fields of the entry survive the merge.
    assert_eq!(updated.name, "text_translate project");

    let other = state.project("p2").expect("p2");
    assert_eq!(other.status, ProjectStatus::Draft);
    assert_eq!(other.updated_at_ms, 1_000);
}

#[test]
fn update_with_unknown_id_is_a_silent_no_op() {
    let mut state = state();
    run_silent(
        &mut state,
        AppAction::AddProject(project("p1", "text_translate", ProjectStatus::Processing)),
    );
    let before = state.projects.clone();

    run_silent(
        &mut state,
        AppAction::UpdateProject {
            id: "missing".to_string(),
            patch: ProjectPatch {
                status: Some(ProjectStatus::Failed),
                ..ProjectPatch::default()
            },
        },
    );

    assert_eq!(state.projects, before);
}

#[test]
fn set_projects_replaces_the_list_wholesale() {
    let mut state = state();
    run_silent(
        &mut state,
        AppAction::AddProject(project("old", "text_summarize", ProjectStatus::Completed)),
    );

    run_silent(
        &mut state,
        AppAction::SetProjects(vec![
            project("a", "audio_to_text", ProjectStatus::Draft),
            project("b", "text_to_speech", ProjectStatus::Failed),
        ]),
    );

    let ids: Vec<&str> = state.projects.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}
