use anyhow::Result;
use barista::application::{AppError, ShopService};
use barista::domain::MenuError;
use barista::cli::{load_menu, Session};
use std::fs::{self, File};
use std::io::BufReader;
use tempfile::TempDir;

/// Helper to write a file into a temporary directory
fn write_temp(dir: &TempDir, name: &str, contents: &str) -> Result<std::path::PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

#[test]
fn test_load_custom_menu() -> Result<()> {
    let temp = TempDir::new()?;
    let path = write_temp(
        &temp,
        "menu.json",
        r#"[
            { "name": "Flat White", "price": "3.80" },
            { "name": "Cortado", "price": "3" }
        ]"#,
    )?;

    let items = load_menu(&path)?;
    let service = ShopService::with_menu(items)?;

    let menu = service.menu();
    assert_eq!(menu.names(), vec!["Flat White", "Cortado"]);
    assert_eq!(menu.price_of("Cortado"), Some(300));
    assert!(!service.is_menu_item_available("Latte"));
    Ok(())
}

#[test]
fn test_menu_file_with_bad_price() -> Result<()> {
    let temp = TempDir::new()?;
    let path = write_temp(&temp, "menu.json", r#"[{ "name": "Tea", "price": "two" }]"#)?;

    let err = load_menu(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid price 'two' for 'Tea'"));
    Ok(())
}

#[test]
fn test_menu_file_with_duplicates_is_rejected() -> Result<()> {
    let temp = TempDir::new()?;
    let path = write_temp(
        &temp,
        "menu.json",
        r#"[{ "name": "Tea", "price": "2" }, { "name": "Tea", "price": "3" }]"#,
    )?;

    let items = load_menu(&path)?;
    assert!(ShopService::with_menu(items).is_err());
    Ok(())
}

#[test]
fn test_menu_file_with_oversized_price_is_rejected() -> Result<()> {
    let temp = TempDir::new()?;
    let path = write_temp(
        &temp,
        "menu.json",
        r#"[{ "name": "Gold Latte", "price": "92233720368547758.07" }]"#,
    )?;

    let items = load_menu(&path)?;
    let err = ShopService::with_menu(items).err().unwrap();
    assert!(matches!(err, AppError::Menu(MenuError::PriceTooLarge(ref name)) if name == "Gold Latte"));
    Ok(())
}

#[test]
fn test_missing_menu_file() {
    let err = load_menu(std::path::Path::new("/nonexistent/menu.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to open menu file"));
}

#[test]
fn test_session_script_file() -> Result<()> {
    let temp = TempDir::new()?;
    let path = write_temp(
        &temp,
        "day.txt",
        "# morning rush\n\
         order Alice: Latte\n\
         order Bob: Espresso\n\
         order Dave: Tea\n\
         check Mocha\n\
         export\n\
         report\n",
    )?;

    let service = ShopService::new();
    let mut out = Vec::new();
    let summary = Session::new(&service).run(BufReader::new(File::open(&path)?), &mut out)?;
    let output = String::from_utf8(out)?;

    assert_eq!(summary.accepted, 2);
    assert_eq!(summary.rejected, 1);
    assert_eq!(service.daily_revenue(), 650);
    assert!(output.contains("Mocha is available for $4.50"));
    assert!(output.contains("id,placed_at,customer,drink,price\n"));
    assert!(output.contains("Total Revenue: $6.50\n"));
    assert!(output.contains("1. Alice - Latte\n2. Bob - Espresso\n"));
    assert!(output.contains("Average Order Value: $3.25\n"));
    Ok(())
}
