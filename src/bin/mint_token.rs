//! One-shot developer-token minting.
//!
//! Command-line counterpart of the `/token` endpoint, for provisioning a
//! token without running the server. Prints the compact JWT to stdout.

use std::process::ExitCode;

use music_player_web::token::{mint_developer_token, Secrets};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let [_, private_key_path, key_id, team_id] = args.as_slice() else {
        eprintln!("Usage: mint_token <private_key_path> <key_id> <team_id>");
        return ExitCode::FAILURE;
    };

    let private_key = match std::fs::read_to_string(private_key_path) {
        Ok(pem) => pem,
        Err(e) => {
            eprintln!("Error reading private key: {e}");
            return ExitCode::FAILURE;
        }
    };

    let secrets = Secrets {
        private_key,
        team_id: team_id.clone(),
        key_id: key_id.clone(),
    };

    match mint_developer_token(&secrets) {
        Ok(token) => {
            println!("{token}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error generating token: {e}");
            ExitCode::FAILURE
        }
    }
}
