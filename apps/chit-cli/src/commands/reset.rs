// reset.rs - Delete every stored record.

use std::io::{self, Write};

use rand::Rng;

use chit_session::Session;
use chit_store::KvStore;

pub fn execute<S: KvStore, R: Rng>(session: &mut Session<S, R>, yes: bool) -> anyhow::Result<()> {
    if !yes && !confirm()? {
        println!("Nothing deleted.");
        return Ok(());
    }

    session.reset_everything()?;
    println!("All records deleted. Run `chit welcome <name>` to start again.");
    Ok(())
}

fn confirm() -> anyhow::Result<bool> {
    print!("This deletes your name, goals, and pick history. Type 'yes' to confirm: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().eq_ignore_ascii_case("yes"))
}
