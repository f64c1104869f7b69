mod common;

use common::{PIECE_ARCHER, PIECE_DRAGON, PIECES_TOML, setup_catalog};
use placement::catalog::PieceCatalog;
use placement::error::{CatalogError, ErrorKind, LoadError};

#[test]
fn test_load_catalog_from_toml() {
    let catalog = setup_catalog();
    assert_eq!(catalog.len(), 5);

    let names: Vec<&str> = catalog.pieces().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Soldier", "Archer", "Knight", "Catapult", "Dragon"],
        "目錄應保持檔案中的順序"
    );

    let archer = catalog.get(PIECE_ARCHER).expect("應找到 Archer");
    assert_eq!((archer.health, archer.attack, archer.range, archer.cost), (2, 2, 3, 2));
    assert_eq!(catalog.get(PIECE_DRAGON).map(|p| p.cost), Some(9));
}

#[test]
fn test_catalog_toml_roundtrip_keeps_order() {
    let catalog = setup_catalog();
    let toml = catalog.to_toml().expect("序列化應成功");
    let reloaded = PieceCatalog::from_toml(&toml).expect("重新載入應成功");
    assert_eq!(catalog, reloaded);
}

#[test]
fn test_invalid_toml_returns_load_error() {
    let err = PieceCatalog::from_toml("[[pieces]]\nid = 1\nname = \"Broken\"")
        .expect_err("缺少欄位應失敗");
    assert!(
        matches!(err.kind(), ErrorKind::Load(LoadError::DeserializeError { .. })),
        "應為 DeserializeError，實際為 {:?}",
        err.kind()
    );
}

#[test]
fn test_reserved_and_duplicate_ids_are_rejected() {
    let reserved = PIECES_TOML.replacen("id = 1\n", "id = 0\n", 1);
    let err = PieceCatalog::from_toml(&reserved).expect_err("ID 0 應失敗");
    assert!(matches!(
        err.kind(),
        ErrorKind::Catalog(CatalogError::ReservedPieceId { .. })
    ));

    let duplicate = PIECES_TOML.replacen("id = 2\n", "id = 1\n", 1);
    let err = PieceCatalog::from_toml(&duplicate).expect_err("重複 ID 應失敗");
    assert!(matches!(
        err.kind(),
        ErrorKind::Catalog(CatalogError::DuplicatePieceId { id: 1 })
    ));
}

#[test]
fn test_empty_pieces_list_is_rejected() {
    let err = PieceCatalog::from_toml("pieces = []").expect_err("空目錄應失敗");
    assert!(matches!(err.kind(), ErrorKind::Catalog(CatalogError::Empty)));
}
