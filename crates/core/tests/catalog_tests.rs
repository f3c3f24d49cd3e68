// ═══════════════════════════════════════════════════════════════════
// Catalog loading tests — per-region parsing, canonicalization,
// merge semantics, and tolerance for broken sources
// ═══════════════════════════════════════════════════════════════════

use stock_dashboard_core::errors::CoreError;
use stock_dashboard_core::models::region::Region;
use stock_dashboard_core::services::catalog_service::CatalogService;

const IBOV: &str = "\
Código;Ação;Tipo;Qtde. Teórica;Part. (%)
PETR4;PETROBRAS;PN N2;4102606993;6,508
VALE3 ;VALE;ON NM;4539007580;10,212
;SEM CÓDIGO;ON;1;0,001
ITUB4;ITAUUNIBANCO;PN N1;4304113952;5,841
";

const NASDAQ: &str = "\
Symbol,Name,Market Cap,Country
AAPL,Apple Inc. Common Stock,2950000000000,United States
AMZN,\"Amazon.com, Inc. Common Stock\",1900000000000,United States
MSFT,Microsoft Corporation Common Stock,3100000000000,United States
";

const EURONEXT: &str = "\
Name;ISIN;Symbol;Market
AIR LIQUIDE;FR0000120073;AI;Euronext Paris
ASML HOLDING;NL0010273215; ASML ;Euronext Amsterdam
AEX INDEX;QS0011224977;;Euronext Amsterdam
LVMH;FR0000121014;MC;Euronext Paris
";

mod parse_region {
    use super::*;

    #[test]
    fn brazil_appends_suffix_and_flags() {
        let service = CatalogService::new();
        let entries = service
            .parse_region(Region::Brazil, IBOV.as_bytes())
            .unwrap();

        let symbols: Vec<&str> = entries.iter().map(|e| e.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["PETR4.SA", "VALE3.SA", "ITUB4.SA"]);
        assert_eq!(entries[0].label, format!("{} PETR4.SA", Region::Brazil.flag()));
    }

    #[test]
    fn brazil_trims_the_identifier() {
        let service = CatalogService::new();
        let entries = service
            .parse_region(Region::Brazil, IBOV.as_bytes())
            .unwrap();
        // "VALE3 " in the source becomes "VALE3.SA"
        assert!(entries.iter().any(|e| e.symbol == "VALE3.SA"));
    }

    #[test]
    fn usa_keeps_symbols_as_is_and_handles_quoted_names() {
        let service = CatalogService::new();
        let entries = service
            .parse_region(Region::Usa, NASDAQ.as_bytes())
            .unwrap();

        let symbols: Vec<&str> = entries.iter().map(|e| e.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAPL", "AMZN", "MSFT"]);
    }

    #[test]
    fn europe_drops_blank_rows_and_trims() {
        let service = CatalogService::new();
        let entries = service
            .parse_region(Region::Europe, EURONEXT.as_bytes())
            .unwrap();

        let symbols: Vec<&str> = entries.iter().map(|e| e.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AI", "ASML", "MC"]);
    }

    #[test]
    fn bom_on_the_header_is_tolerated() {
        let source = format!("\u{feff}{IBOV}");
        let service = CatalogService::new();
        let entries = service
            .parse_region(Region::Brazil, source.as_bytes())
            .unwrap();
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn missing_identifier_column_is_a_load_error() {
        let source = "Name;ISIN\nAIR LIQUIDE;FR0000120073\n";
        let service = CatalogService::new();
        let err = service
            .parse_region(Region::Europe, source.as_bytes())
            .unwrap_err();

        match err {
            CoreError::CatalogLoad { region, message } => {
                assert_eq!(region, "Europe");
                assert!(message.contains("Symbol"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn ragged_rows_are_tolerated() {
        let source = "Código;Ação\nPETR4;PETROBRAS;EXTRA;FIELDS\nVALE3\n";
        let service = CatalogService::new();
        let entries = service
            .parse_region(Region::Brazil, source.as_bytes())
            .unwrap();
        assert_eq!(entries.len(), 2);
    }
}

mod build_catalog {
    use super::*;
    use std::fs;

    fn write_sources(dir: &std::path::Path) {
        fs::write(dir.join("IBOV.csv"), IBOV).unwrap();
        fs::write(dir.join("NASDAQ.csv"), NASDAQ).unwrap();
        fs::write(dir.join("EURONEXT.csv"), EURONEXT).unwrap();
    }

    #[test]
    fn merges_enabled_regions_in_order() {
        let dir = tempfile::tempdir().unwrap();
        write_sources(dir.path());

        let service = CatalogService::new();
        let catalog = service.build_catalog(dir.path(), &Region::ALL);

        assert_eq!(catalog.len(), 3 + 3 + 3);
        let first: Vec<&str> = catalog.labels().take(3).collect();
        assert!(first.iter().all(|l| l.starts_with(Region::Brazil.flag())));
    }

    #[test]
    fn disabled_regions_contribute_nothing() {
        let dir = tempfile::tempdir().unwrap();
        write_sources(dir.path());

        let service = CatalogService::new();
        let catalog = service.build_catalog(dir.path(), &[Region::Usa]);

        assert_eq!(catalog.len(), 3);
        assert!(catalog.labels().all(|l| l.starts_with(Region::Usa.flag())));
    }

    #[test]
    fn a_missing_source_only_silences_its_region() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("NASDAQ.csv"), NASDAQ).unwrap();
        // IBOV.csv and EURONEXT.csv intentionally absent.

        let service = CatalogService::new();
        let catalog = service.build_catalog(dir.path(), &Region::ALL);

        assert_eq!(catalog.len(), 3);
        assert!(catalog.contains_label(&Region::Usa.display_label("AAPL")));
    }

    #[test]
    fn a_malformed_source_only_silences_its_region() {
        let dir = tempfile::tempdir().unwrap();
        write_sources(dir.path());
        fs::write(dir.path().join("EURONEXT.csv"), "Name;ISIN\nno symbol column\n").unwrap();

        let service = CatalogService::new();
        let catalog = service.build_catalog(dir.path(), &Region::ALL);

        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn load_region_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let service = CatalogService::new();
        let err = service.load_region(dir.path(), Region::Brazil).unwrap_err();
        assert!(matches!(err, CoreError::CatalogLoad { .. }));
    }

    #[test]
    fn same_content_builds_the_same_catalog() {
        let dir = tempfile::tempdir().unwrap();
        write_sources(dir.path());

        let service = CatalogService::new();
        let a = service.build_catalog(dir.path(), &Region::ALL);
        let b = service.build_catalog(dir.path(), &Region::ALL);

        let la: Vec<&str> = a.labels().collect();
        let lb: Vec<&str> = b.labels().collect();
        assert_eq!(la, lb);
    }
}
