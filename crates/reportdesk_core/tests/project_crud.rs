use reportdesk_core::db::open_db_in_memory;
use reportdesk_core::{
    EntityKind, ErrorKind, Project, ProjectDraft, ProjectRepository, ProjectService,
    ProjectUpdate, RepoError, ServiceError, SqliteProjectRepository, ValidationError,
};

fn draft(id: &str, name: &str, description: Option<&str>) -> ProjectDraft {
    ProjectDraft {
        id: Some(id.to_string()),
        name: Some(name.to_string()),
        description: description.map(str::to_string),
    }
}

#[test]
fn create_then_get_returns_declared_fields() {
    let conn = open_db_in_memory().unwrap();
    let service = ProjectService::new(SqliteProjectRepository::try_new(&conn).unwrap());

    let created = service
        .create_project(draft("p1", "Apollo", Some("moon shot")))
        .unwrap();
    let loaded = service.get_project("p1").unwrap();

    assert_eq!(created, loaded);
    assert_eq!(
        loaded,
        Project::new("p1", "Apollo", Some("moon shot".to_string()))
    );
}

#[test]
fn description_is_optional_at_creation() {
    let conn = open_db_in_memory().unwrap();
    let service = ProjectService::new(SqliteProjectRepository::try_new(&conn).unwrap());

    service.create_project(draft("p1", "Bare", None)).unwrap();
    assert!(service.get_project("p1").unwrap().description.is_none());
}

#[test]
fn duplicate_create_conflicts_and_keeps_original_row() {
    let conn = open_db_in_memory().unwrap();
    let service = ProjectService::new(SqliteProjectRepository::try_new(&conn).unwrap());

    service.create_project(draft("p1", "original", None)).unwrap();
    let err = service
        .create_project(draft("p1", "impostor", Some("x")))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert!(matches!(
        err,
        ServiceError::Conflict { entity: EntityKind::Project, ref id } if id == "p1"
    ));
    assert_eq!(service.get_project("p1").unwrap().name, "original");
}

#[test]
fn create_validates_before_touching_storage() {
    let conn = open_db_in_memory().unwrap();
    let service = ProjectService::new(SqliteProjectRepository::try_new(&conn).unwrap());

    let err = service
        .create_project(ProjectDraft {
            id: Some("p1".to_string()),
            name: None,
            description: Some("no name".to_string()),
        })
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::MissingField { field: "name", .. })
    ));
    assert!(service.list_projects().unwrap().is_empty());
}

#[test]
fn list_returns_projects_in_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let service = ProjectService::new(SqliteProjectRepository::try_new(&conn).unwrap());

    for id in ["zeta", "alpha", "mid"] {
        service.create_project(draft(id, id, None)).unwrap();
    }

    let ids = service
        .list_projects()
        .unwrap()
        .into_iter()
        .map(|project| project.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn get_missing_and_empty_ids() {
    let conn = open_db_in_memory().unwrap();
    let service = ProjectService::new(SqliteProjectRepository::try_new(&conn).unwrap());

    assert_eq!(
        service.get_project("ghost").unwrap_err().kind(),
        ErrorKind::NotFound
    );
    assert_eq!(
        service.get_project("").unwrap_err().kind(),
        ErrorKind::Validation
    );
}

#[test]
fn update_replaces_fields_and_echoes_input() {
    let conn = open_db_in_memory().unwrap();
    let service = ProjectService::new(SqliteProjectRepository::try_new(&conn).unwrap());
    service.create_project(draft("p1", "old", None)).unwrap();

    let updated = service
        .update_project(
            "p1",
            ProjectUpdate {
                name: Some("new".to_string()),
                description: Some("now described".to_string()),
            },
        )
        .unwrap();

    assert_eq!(
        updated,
        Project::new("p1", "new", Some("now described".to_string()))
    );
    assert_eq!(service.get_project("p1").unwrap(), updated);
}

#[test]
fn update_requires_both_fields() {
    let conn = open_db_in_memory().unwrap();
    let service = ProjectService::new(SqliteProjectRepository::try_new(&conn).unwrap());
    service.create_project(draft("p1", "old", None)).unwrap();

    let err = service
        .update_project(
            "p1",
            ProjectUpdate {
                name: Some("new".to_string()),
                description: None,
            },
        )
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(service.get_project("p1").unwrap().name, "old");
}

#[test]
fn update_missing_project_is_not_found_and_changes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let service = ProjectService::new(SqliteProjectRepository::try_new(&conn).unwrap());
    service.create_project(draft("p1", "kept", None)).unwrap();

    let err = service
        .update_project(
            "ghost",
            ProjectUpdate {
                name: Some("n".to_string()),
                description: Some("d".to_string()),
            },
        )
        .unwrap_err();

    assert!(matches!(err, ServiceError::NotFound { ref id, .. } if id == "ghost"));
    assert_eq!(service.list_projects().unwrap().len(), 1);
    assert_eq!(service.get_project("p1").unwrap().name, "kept");
}

#[test]
fn second_delete_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = ProjectService::new(SqliteProjectRepository::try_new(&conn).unwrap());
    service.create_project(draft("p1", "doomed", None)).unwrap();

    assert_eq!(service.delete_project("p1").unwrap(), "p1");
    assert_eq!(
        service.delete_project("p1").unwrap_err().kind(),
        ErrorKind::NotFound
    );
    assert_eq!(
        service.get_project("p1").unwrap_err().kind(),
        ErrorKind::NotFound
    );
}

#[test]
fn repository_reports_affected_counts() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::try_new(&conn).unwrap();
    repo.insert_project(&Project::new("p1", "n", None)).unwrap();

    assert_eq!(repo.update_project("p1", "n2", "d2").unwrap(), 1);
    assert_eq!(repo.update_project("nope", "n", "d").unwrap(), 0);
    assert_eq!(repo.delete_project("nope").unwrap(), 0);
    assert_eq!(repo.delete_project("p1").unwrap(), 1);
}

#[test]
fn repository_treats_ids_as_data_not_sql() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::try_new(&conn).unwrap();
    let hostile = "x'); DROP TABLE projects; --";

    repo.insert_project(&Project::new(hostile, "n", None)).unwrap();

    assert_eq!(repo.get_project(hostile).unwrap().unwrap().id, hostile);
    assert_eq!(repo.list_projects().unwrap().len(), 1);
}

#[test]
fn repository_rejects_rows_with_null_name() {
    let conn = open_db_in_memory().unwrap();
    conn.execute("INSERT INTO projects (id) VALUES ('legacy');", [])
        .unwrap();
    let repo = SqliteProjectRepository::try_new(&conn).unwrap();

    let err = repo.get_project("legacy").unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}
