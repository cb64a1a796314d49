//! Info command - print manager registration metadata

use crate::error::RpmLockResult;
use crate::manager;

/// Execute the info command
pub fn execute() -> RpmLockResult<()> {
    let json = serde_json::to_string_pretty(&manager::definition())?;
    println!("{}", json);
    Ok(())
}
