use api_shared::{ReferralData, VerifyRes};
use clap::{Parser, Subcommand};
use referral_core::{
    config::{api_url_from_env_value, table_from_env_value, timeout_from_env_value},
    mask_name, AirtableStore, LookupOutcome, LookupRequest, ReferralConfig, ReferralResult,
    ReferralService, VERIFY_ACTION,
};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "referral")]
#[command(about = "Referral lookup CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a referral exists and show the masked patient name
    Lookup {
        /// Public referral key
        key: String,
    },
    /// Verify a requester's phone number and print the full referral
    Verify {
        /// Public referral key
        key: String,
        /// Requester phone number (hyphens and spaces are ignored)
        #[arg(long)]
        phone: String,
    },
    /// Mask a patient name without contacting the record store
    Mask {
        /// Patient name
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Lookup { key }) => {
            let request = LookupRequest {
                key: Some(key),
                ..Default::default()
            };
            match lookup_output(service()?.lookup(request).await) {
                Ok(line) => println!("{}", line),
                Err(e) => eprintln!("Error looking up referral: {}", e),
            }
        }
        Some(Commands::Verify { key, phone }) => {
            let request = LookupRequest {
                key: Some(key),
                phone: Some(phone),
                action: Some(VERIFY_ACTION.to_string()),
            };
            match verify_output(service()?.lookup(request).await) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("Error verifying referral: {}", e),
            }
        }
        Some(Commands::Mask { name }) => {
            println!("{}", mask_name(&name));
        }
        None => {
            println!("No command given. Use --help for usage.");
        }
    }

    Ok(())
}

/// Text printed by `referral lookup`: the masked name on its own line.
fn lookup_output(result: ReferralResult<LookupOutcome>) -> Result<String, String> {
    match result {
        Ok(LookupOutcome::Exists { masked_name }) => Ok(masked_name),
        Ok(LookupOutcome::Verified(_)) => Err("unexpected verification result".into()),
        Err(e) => Err(e.to_string()),
    }
}

/// Text printed by `referral verify`: the verified referral as pretty JSON.
fn verify_output(result: ReferralResult<LookupOutcome>) -> Result<String, String> {
    match result {
        Ok(LookupOutcome::Verified(record)) => {
            let res = VerifyRes {
                success: true,
                data: ReferralData::from(&*record),
            };
            serde_json::to_string_pretty(&res).map_err(|e| e.to_string())
        }
        Ok(LookupOutcome::Exists { .. }) => Err("record was not verified".into()),
        Err(e) => Err(e.to_string()),
    }
}

/// Build the lookup service from `AIRTABLE_*` environment variables.
fn service() -> Result<ReferralService, Box<dyn std::error::Error>> {
    let cfg = ReferralConfig::new(
        std::env::var("AIRTABLE_BASE_ID").ok(),
        std::env::var("AIRTABLE_TOKEN").ok(),
        table_from_env_value(std::env::var("AIRTABLE_TABLE").ok()),
        api_url_from_env_value(std::env::var("AIRTABLE_API_URL").ok()),
        timeout_from_env_value(std::env::var("AIRTABLE_TIMEOUT_SECS").ok())?,
    )?;
    let store = AirtableStore::new(cfg)?;
    Ok(ReferralService::new(Arc::new(store)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use referral_core::{ReferralError, ReferralRecord};

    #[test]
    fn lookup_prints_only_the_masked_name() {
        let outcome = LookupOutcome::Exists {
            masked_name: "K********".into(),
        };
        assert_eq!(lookup_output(Ok(outcome)), Ok("K********".to_string()));
    }

    #[test]
    fn lookup_reports_unexpected_outcomes_and_errors() {
        let verified = LookupOutcome::Verified(Box::default());
        assert!(lookup_output(Ok(verified)).is_err());

        let err = lookup_output(Err(ReferralError::NotFound { key: "ABC".into() }))
            .expect_err("not found");
        assert!(err.contains("ABC"));
    }

    #[test]
    fn verify_prints_the_full_payload_as_json() {
        let record = ReferralRecord {
            patient_name: "Kim Minsu".into(),
            requester_phone: "01012345678".into(),
            ..Default::default()
        };
        let json = verify_output(Ok(LookupOutcome::Verified(Box::new(record)))).expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["patientName"], "Kim Minsu");
        assert_eq!(value["data"].as_object().map(|o| o.len()), Some(22));
    }

    #[test]
    fn verify_reports_unexpected_outcomes() {
        let exists = LookupOutcome::Exists {
            masked_name: "K****".into(),
        };
        assert!(verify_output(Ok(exists)).is_err());
    }
}
