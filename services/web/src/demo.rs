use crate::infra::{default_validation_policy, InMemoryClipboard};
use chrono::Local;
use clap::Args;
use sav_clan::config::AppConfig;
use sav_clan::error::AppError;
use sav_clan::recruitment::{
    ApplicationDraft, HandoffDispatcher, RankTier, RecruitmentSession, SubmissionError,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the rejected-draft portion of the walk-through
    #[arg(long)]
    pub(crate) skip_rejection: bool,
}

#[derive(Args, Debug)]
pub(crate) struct HandoffArgs {
    /// In-game name as it appears in BloodStrike
    #[arg(long)]
    in_game_name: String,
    /// Player ID from the profile screen
    #[arg(long)]
    player_id: String,
    /// Account level
    #[arg(long)]
    level: String,
    /// Rank tier slug (pro, elite, maestro, gran-maestro, mitico, mitico-top-global)
    #[arg(long)]
    rank: String,
    /// Battle Royale kill/death ratio
    #[arg(long)]
    kd_battle_royale: String,
    /// Battle Escalation kill/death ratio
    #[arg(long)]
    kd_battle_escalation: String,
    /// Age in years
    #[arg(long)]
    age: String,
    /// Optional free-text message
    #[arg(long, default_value = "")]
    message: String,
    /// Confirm you have WhatsApp
    #[arg(long)]
    has_whatsapp: bool,
    /// Confirm you have time available to play
    #[arg(long)]
    is_available: bool,
    /// Accept the content creation terms
    #[arg(long)]
    accepts_content_terms: bool,
}

impl HandoffArgs {
    fn into_draft(self) -> ApplicationDraft {
        ApplicationDraft {
            in_game_name: self.in_game_name,
            player_id: self.player_id,
            level: self.level,
            rank: RankTier::from_slug(&self.rank),
            kd_battle_royale: self.kd_battle_royale,
            kd_battle_escalation: self.kd_battle_escalation,
            age: self.age,
            has_whatsapp: self.has_whatsapp,
            is_available: self.is_available,
            accepts_content_terms: self.accepts_content_terms,
            message: self.message,
        }
    }
}

pub(crate) fn run_handoff(args: HandoffArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;

    let mut session = RecruitmentSession::new(default_validation_policy());
    session.edit(args.into_draft())?;

    let result = match session.submit() {
        Ok(result) => result,
        Err(SubmissionError::Invalid(errors)) => {
            println!("Application rejected ({} field(s)):", errors.violations.len());
            for line in errors.describe() {
                println!("  - {line}");
            }
            return Ok(());
        }
        Err(other) => return Err(other.into()),
    };

    let dispatcher = HandoffDispatcher::new(
        Box::new(InMemoryClipboard::default()),
        config.recruitment.group_link,
    );
    let receipt = dispatcher.dispatch(&result.application);

    println!("{}", result.message);
    println!("\n{}\n", receipt.message);
    println!("Group link: {}", receipt.group_link);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let policy = default_validation_policy();

    println!("Sav Oficial recruitment demo");

    if !args.skip_rejection {
        let mut session = RecruitmentSession::new(policy.clone());
        session.edit(underqualified_draft())?;

        match session.submit() {
            Err(SubmissionError::Invalid(errors)) => {
                println!(
                    "\nDraft rejected with {} violation(s):",
                    errors.violations.len()
                );
                for line in errors.describe() {
                    println!("  - {line}");
                }
                println!("Session state: {}", session.state().label());
            }
            Ok(_) => println!("\nUnexpected: underqualified draft passed validation"),
            Err(other) => return Err(other.into()),
        }
    }

    let mut session = RecruitmentSession::new(policy);
    session.edit(qualified_draft())?;
    let result = session.submit()?;

    let clipboard = InMemoryClipboard::default();
    let dispatcher = HandoffDispatcher::new(
        Box::new(clipboard.clone()),
        config.recruitment.group_link,
    );
    let receipt = dispatcher.dispatch(&result.application);

    println!(
        "\nApplication completed on {} — session state: {}",
        Local::now().date_naive(),
        session.state().label()
    );
    println!("Result: {}", result.message);
    println!(
        "Notification: {} {}",
        receipt.notification.title(),
        receipt.notification.detail()
    );
    println!("Group link: {}", receipt.group_link);
    println!("\nHand-off message:\n{}", receipt.message);
    println!(
        "\nClipboard writes recorded: {}",
        clipboard.writes().len()
    );

    Ok(())
}

fn qualified_draft() -> ApplicationDraft {
    ApplicationDraft {
        in_game_name: "RazorWing".to_string(),
        player_id: "77104582".to_string(),
        level: "68".to_string(),
        rank: Some(RankTier::MiticoTopGlobal),
        kd_battle_royale: "3.8".to_string(),
        kd_battle_escalation: "3.1".to_string(),
        age: "20".to_string(),
        has_whatsapp: true,
        is_available: true,
        accepts_content_terms: true,
        message: "Entry fragger, available for evening scrims.".to_string(),
    }
}

fn underqualified_draft() -> ApplicationDraft {
    ApplicationDraft {
        in_game_name: "Rk".to_string(),
        player_id: "123".to_string(),
        level: "49".to_string(),
        rank: None,
        kd_battle_royale: "2.99".to_string(),
        kd_battle_escalation: "two".to_string(),
        age: "17".to_string(),
        has_whatsapp: true,
        is_available: false,
        accepts_content_terms: false,
        message: String::new(),
    }
}
