use chrono::{NaiveDate, NaiveDateTime};
use client_registry::dto::client::ClientDto;
use client_registry::pagination::{PageRequest, Sort, SortField};
use client_registry::repository::client::DieselClientRepository;
use client_registry::services::ServiceError;
use client_registry::services::client::{
    create_client, delete_client, get_client_by_id, list_clients, list_clients_by_income,
    list_clients_by_income_greater_than, update_client,
};

mod common;

fn birth_date(year: i32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, 12, 23)
        .unwrap()
        .and_hms_opt(7, 0, 0)
        .unwrap()
}

fn dto(name: &str, cpf: &str, income: f64, children: i32) -> ClientDto {
    ClientDto::new(0, name, cpf, income, birth_date(1980), children)
}

fn seed(repo: &DieselClientRepository) -> Vec<ClientDto> {
    [
        dto("Conceicao Evaristo", "10619244881", 1500.0, 2),
        dto("Clarice Lispector", "10919444522", 3800.0, 2),
        dto("Carolina Maria de Jesus", "10419244771", 7500.0, 0),
        dto("Jose Saramago", "10239254871", 5000.0, 0),
        dto("Chimamanda Adichie", "10114274861", 1500.0, 0),
    ]
    .iter()
    .map(|d| create_client(repo, d).unwrap())
    .collect()
}

#[test]
fn test_create_assigns_id_and_echoes_fields() {
    let test_db = common::TestDb::new("test_service_create.db");
    let repo = DieselClientRepository::new(test_db.pool());

    let created = create_client(&repo, &dto("Toni Morrison", "10219344681", 10000.0, 0)).unwrap();
    assert!(created.id > 0);
    assert_eq!(created.name, "Toni Morrison");
    assert_eq!(created.cpf, "10219344681");
    assert_eq!(created.income, 10000.0);

    let fetched = get_client_by_id(&repo, created.id).unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn test_create_keeps_caller_chosen_id() {
    let test_db = common::TestDb::new("test_service_create_with_id.db");
    let repo = DieselClientRepository::new(test_db.pool());

    let mut wanted = dto("Fulano da Silva", "123", 2000.0, 1);
    wanted.id = 39;

    let created = create_client(&repo, &wanted).unwrap();
    assert_eq!(created.id, 39);
    assert_eq!(created, wanted);
}

#[test]
fn test_get_by_id_missing_is_not_found() {
    let test_db = common::TestDb::new("test_service_get_missing.db");
    let repo = DieselClientRepository::new(test_db.pool());
    seed(&repo);

    assert!(matches!(
        get_client_by_id(&repo, 999),
        Err(ServiceError::NotFound)
    ));
}

#[test]
fn test_list_clients_pages_dtos_in_order() {
    let test_db = common::TestDb::new("test_service_list.db");
    let repo = DieselClientRepository::new(test_db.pool());
    seed(&repo);

    let request = PageRequest::new(1, 2).sort_by(Sort::ascending(SortField::Name));
    let page = list_clients(&repo, &request).unwrap();

    assert_eq!(page.total, 5);
    assert_eq!(page.len(), 2);
    assert_eq!(page.items[0].name, "Carolina Maria de Jesus");
    assert_eq!(page.items[1].name, "Chimamanda Adichie");
    assert_eq!(page.page, 1);
    assert_eq!(page.per_page, 2);
    assert_eq!(page.sort, request.sort);
}

#[test]
fn test_list_by_income_returns_only_exact_matches() {
    let test_db = common::TestDb::new("test_service_list_income.db");
    let repo = DieselClientRepository::new(test_db.pool());
    seed(&repo);

    let request = PageRequest::new(1, 10).sort_by(Sort::ascending(SortField::Name));
    let page = list_clients_by_income(&repo, &request, 1500.0).unwrap();

    assert_eq!(page.total, 2);
    assert!(page.items.iter().all(|c| c.income == 1500.0));
}

#[test]
fn test_list_by_income_greater_than_excludes_threshold() {
    let test_db = common::TestDb::new("test_service_list_income_gt.db");
    let repo = DieselClientRepository::new(test_db.pool());
    seed(&repo);

    let request = PageRequest::new(1, 10).sort_by(Sort::ascending(SortField::Income));
    let page = list_clients_by_income_greater_than(&repo, &request, 4800.0).unwrap();

    assert_eq!(page.total, 2);
    assert_eq!(page.items[0].name, "Jose Saramago");
    assert_eq!(page.items[1].name, "Carolina Maria de Jesus");
}

#[test]
fn test_update_persists_copied_fields() {
    let test_db = common::TestDb::new("test_service_update.db");
    let repo = DieselClientRepository::new(test_db.pool());
    let seeded = seed(&repo);

    let target = &seeded[0];
    let changes = dto("Conceicao Evaristo", "10619244881", 1800.0, 3);

    let updated = update_client(&repo, target.id, &changes).unwrap();
    assert_eq!(updated.id, target.id);
    assert_eq!(updated.income, 1800.0);
    assert_eq!(updated.children, 3);

    let reread = get_client_by_id(&repo, target.id).unwrap();
    assert_eq!(reread, updated);
}

#[test]
fn test_update_missing_is_not_found() {
    let test_db = common::TestDb::new("test_service_update_missing.db");
    let repo = DieselClientRepository::new(test_db.pool());
    seed(&repo);

    assert!(matches!(
        update_client(&repo, 1000, &ClientDto::default()),
        Err(ServiceError::NotFound)
    ));
}

#[test]
fn test_delete_existing_then_missing() {
    let test_db = common::TestDb::new("test_service_delete.db");
    let repo = DieselClientRepository::new(test_db.pool());
    let seeded = seed(&repo);

    let id = seeded[0].id;
    assert!(delete_client(&repo, id).is_ok());
    assert!(matches!(
        delete_client(&repo, id),
        Err(ServiceError::NotFound)
    ));
    assert!(matches!(
        get_client_by_id(&repo, id),
        Err(ServiceError::NotFound)
    ));
}
