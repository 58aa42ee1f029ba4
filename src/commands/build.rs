//! Build command implementation

use anyhow::Result;

use crate::build::BuildContext;
use crate::utils::terminal::{print_info, print_success};

/// Configure and compile the project into the build directory
pub fn execute(ctx: &BuildContext<'_>) -> Result<()> {
    let build_dir = ctx.layout.build_dir_display();

    print_info(&format!("Building into {}", build_dir));
    ctx.build()?;
    print_success(&format!("Build finished in {}", build_dir));

    Ok(())
}
