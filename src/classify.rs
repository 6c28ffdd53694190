use anyhow::Result;
use clap::Args;
use serde_json::json;

use crate::logging;
use crate::status::{label_for_raw, style_class_for_raw};

#[derive(Debug, Args, Clone)]
pub struct ClassifyArgs {
    /// Raw status value, e.g. in_stock
    pub value: String,
}

/// Prints the class token first so callers still get the (empty) fallback
/// when the label lookup fails.
pub fn run(args: ClassifyArgs) -> Result<()> {
    let class = style_class_for_raw(&args.value);
    println!("class: {class}");

    match label_for_raw(&args.value) {
        Ok(label) => {
            println!("label: {label}");
            Ok(())
        }
        Err(err) => {
            logging::warn(
                "status.unrecognized",
                "Status value is outside the known set",
                json!({ "value": args.value }),
            );
            Err(err.into())
        }
    }
}
