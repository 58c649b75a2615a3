// welcome.rs - Create the user record.

use rand::Rng;

use chit_goal::MAX_NAME_CHARS;
use chit_session::Session;
use chit_store::KvStore;

pub fn execute<S: KvStore, R: Rng>(session: &mut Session<S, R>, name: &str) -> anyhow::Result<()> {
    if let Some(user) = session.user() {
        println!(
            "Already set up as {}. Run `chit reset` to start over.",
            user.name
        );
        return Ok(());
    }

    match session.create_user(name)? {
        Some(user) => {
            println!("Hey {}! Add your goals with `chit goal add <text>`.", user.name);
        }
        None => {
            println!("Names must be 1-{} characters.", MAX_NAME_CHARS);
        }
    }
    Ok(())
}
