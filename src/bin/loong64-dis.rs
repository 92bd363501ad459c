use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use loong64_rs::disasm::disassemble;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Disassemble a raw LoongArch64 binary"
)]
struct Opts {
    /// Load address for the binary in target address space
    #[arg(long, default_value_t = 0u64)]
    base: u64,
    /// Emit the listing as JSON instead of text
    #[arg(long)]
    json: bool,
    #[arg(value_name = "BINFILE")]
    input: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let bytes = std::fs::read(&opts.input)?;
    let lines = disassemble(&bytes, opts.base);

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&lines)?);
    } else {
        for line in &lines {
            println!("{:#010x}: {:08x}  {}", line.addr, line.enc, line.text);
        }
    }

    Ok(())
}
