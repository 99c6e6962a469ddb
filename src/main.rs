use anyhow::Result;
use sqltree::cli::interactive;

fn main() -> Result<()> {
    env_logger::init();
    interactive()
}
