//! Compiles a directory of AFM files into a Rust module of font metric tables.

use corefont::ctx::{Context, Mode};
use corefont::{emit, encoding, registry};
use std::error::Error;

fn main() {
    env_logger::init();

    let args = match flags::Args::from_env() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: flags::Args) -> Result<(), Box<dyn Error>> {
    let mut ctx = Context::new(if args.print { Mode::Print } else { Mode::Write });

    if let Some(extension) = args.extension {
        ctx.extension = extension;
    }
    if let Some(out) = args.out {
        ctx.output = out;
    }

    let registry = registry::build(&args.dir, &ctx)?;
    let module = emit::emit(&registry, &encoding::all());
    emit::finish(&module, &ctx)
        .map_err(|e| format!("can not write '{}': {}", ctx.output.display(), e))?;

    Ok(())
}

mod flags {
    use std::path::PathBuf;

    xflags::xflags! {
        /// Compile AFM files into embeddable font metric tables
        cmd args {
                required dir: PathBuf
                optional -o, --out out: PathBuf
                optional --extension extension: String
                optional --print
            }

    }
}
