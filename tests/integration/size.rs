use trinkets::size::{format_size, SizeFormatter, Tier};
use trinkets::Error;

use crate::common::init_tracing;

#[test]
fn test_documented_outputs() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    assert_eq!(format_size(None, "", "")?, "n/a");
    assert_eq!(format_size(Some(0.0), "", "")?, "n/a");
    assert_eq!(format_size(Some(500.0), "", "")?, "500Bytes");
    assert_eq!(format_size(Some(1024.0), "", "")?, "1,0KB");
    assert_eq!(format_size(Some(1024f64.powi(2)), " ", " used")?, "1,0 MB used");
    Ok(())
}

#[test]
fn test_dashboard_style_labels() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let used = SizeFormatter::new().with_separator(" ").with_post_fix(" used");
    let free = SizeFormatter::new().with_separator(" ").with_post_fix(" free");

    let total: u64 = 512 * 1024 * 1024 * 1024;
    let taken: u64 = 300 * 1024 * 1024 * 1024 + 400 * 1024 * 1024;

    assert_eq!(used.format(taken)?, "300,4 GB used");
    assert_eq!(free.format(total - taken)?, "211,6 GB free");
    Ok(())
}

#[test]
fn test_every_tier_is_reachable() -> Result<(), Box<dyn std::error::Error>> {
    let formatter = SizeFormatter::new();
    for tier in Tier::ALL {
        let rendered = formatter.format(3.0 * tier.divisor())?;
        assert!(rendered.ends_with(tier.label()), "{rendered} should end with {tier}");
    }
    Ok(())
}

#[test]
fn test_negative_input_is_an_error() {
    init_tracing();

    let err = SizeFormatter::new().format(-1i32).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}
