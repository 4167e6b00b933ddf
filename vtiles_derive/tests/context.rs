use anyhow::{Result, bail};
use vtiles_derive::context;

#[context("Failed to render tile {level}/{x}")]
fn failing(level: u8, x: u32) -> Result<u32> {
	if x > 3 {
		bail!("x is too large");
	}
	Ok(u32::from(level) + x)
}

#[context("Failed to read plugin {}", name.len())]
fn plugin_name(name: &str) -> Result<String> {
	Ok(name.trim_end_matches(".input").to_string())
}

#[test]
fn passes_through_ok_values() -> Result<()> {
	assert_eq!(failing(2, 3)?, 5);
	assert_eq!(plugin_name("outline.input")?, "outline");
	Ok(())
}

#[test]
fn adds_context_to_errors() {
	let err = failing(4, 9).unwrap_err();
	let messages: Vec<String> = err.chain().map(|e| e.to_string()).collect();
	assert_eq!(messages, vec!["Failed to render tile 4/9", "x is too large"]);
}
