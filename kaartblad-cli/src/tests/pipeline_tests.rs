use super::*;
use kaartblad_catalog::build_mapping;

fn record(label: &str, metadata: &[(&str, &str)]) -> ManifestRecord {
    ManifestRecord {
        map_label: label.to_string(),
        metadata: metadata
            .iter()
            .map(|(k, v)| (k.to_string(), Some(v.to_string())))
            .collect(),
    }
}

const CATALOG: &str = "\
titel,editie,bladtype,datum__uitgave,datum__verkend,opmerking
KOPREGEL,VIJFDE,Hoofdblad,,,
12 ASSEN,VIJFDE,Hoofdblad,1915,1911,x
12 ASSEN,EERSTE,Hoofdblad,1866,1865,y
12 WVE,VIJFDE,Watervoorzieningseenheden,1916,,
20 ENKHUIZEN,VIJFDE,Hoofdblad,1920,1918,
";

#[test]
fn labels_get_names_by_sheet_number() {
    let mapping = build_mapping(["12 ASSEN", "1 AMELAND", "20 ENKHUIZEN (oud)"]).table;
    let records = vec![record("12.W.bw", &[]), record("1.E", &[]), record("99.W", &[])];
    let table = labels_table(&records, &mapping);
    assert_eq!(table.headers(), ["map_label", "name"]);
    assert_eq!(table.cell(0, NAME_COLUMN), Some("ASSEN"));
    assert_eq!(table.cell(1, NAME_COLUMN), Some("AMELAND"));
    assert_eq!(table.cell(2, NAME_COLUMN), None);
}

#[test]
fn label_prefix_does_not_match_longer_number() {
    let mapping = build_mapping(["1 AMELAND"]).table;
    let table = labels_table(&[record("12.W", &[])], &mapping);
    assert_eq!(table.cell(0, NAME_COLUMN), None);
}

#[test]
fn records_table_unions_metadata_columns() {
    let records = vec![
        record("12.W", &[("bewerkt", "1872")]),
        record("13.W", &[("verkend", "1866"), ("bewerkt", "1880")]),
    ];
    let table = records_table(&records);
    assert_eq!(table.headers(), ["map_label", "bewerkt", "verkend"]);
    assert_eq!(table.cell(0, "verkend"), None);
    assert_eq!(table.cell(1, "bewerkt"), Some("1880"));
}

#[test]
fn edition_rows_filters_and_selects() {
    let catalog = CatalogTable::from_reader(CATALOG.as_bytes()).unwrap();
    let rows = edition_rows(catalog, "VIJFDE", &CompareConfig::default()).unwrap();
    assert_eq!(rows.headers(), ["titel", "datum__uitgave", "datum__verkend"]);
    assert_eq!(rows.titles().unwrap(), vec!["12 ASSEN", "20 ENKHUIZEN"]);
}

#[test]
fn edition_rows_without_sheet_type_column() {
    let catalog =
        CatalogTable::from_reader("titel,editie\nkop,EERSTE\n5 HARLINGEN,EERSTE\n".as_bytes())
            .unwrap();
    let rows = edition_rows(catalog, "EERSTE", &CompareConfig::default()).unwrap();
    assert_eq!(rows.titles().unwrap(), vec!["5 HARLINGEN"]);
}

#[test]
fn edition_rows_requires_edition_column() {
    let catalog = CatalogTable::from_reader("titel\n5 HARLINGEN\n".as_bytes()).unwrap();
    assert!(edition_rows(catalog, "EERSTE", &CompareConfig::default()).is_err());
}

#[test]
fn compare_table_aligns_and_drops_columns() {
    let catalog = CatalogTable::from_reader(CATALOG.as_bytes()).unwrap();
    let config = CompareConfig::default();
    let rows = edition_rows(catalog, "VIJFDE", &config).unwrap();
    let records = vec![
        record("12.W", &[("bewerkt", "1872")]),
        record("20.W", &[]),
        record("21.W", &[]),
    ];

    let table = compare_table(&records, &rows, &config.drop_columns);
    assert_eq!(
        table.headers(),
        ["map_label", "bewerkt", "titel", "datum__verkend"]
    );
    assert_eq!(table.len(), 3);
    assert_eq!(table.cell(0, "titel"), Some("12 ASSEN"));
    assert_eq!(table.cell(1, "datum__verkend"), Some("1918"));
    assert_eq!(table.cell(2, "titel"), None);
    assert_eq!(table.cell(2, "map_label"), Some("21.W"));
}
