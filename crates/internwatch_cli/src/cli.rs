//! Argument parsing and dispatch for the `internwatch` binary.
//!
//! # Responsibility
//! - Turn validated arguments into core commands.
//! - Load the book before a command and save it only when it changed.
//!
//! # Invariants
//! - Field values are parsed by the core value types; the CLI never
//!   re-implements validation.

use clap::{Args, Parser, Subcommand};
use internwatch_core::{
    init_logging, AddCommand, Applicant, ApplicantPredicate, AppConfig, ApplicationStatus,
    ClearCommand, Command, CommandError, ConfigError, Course, DeleteCommand, DisplayIndex,
    EditApplicantDescriptor, EditCommand, Email, FindCommand, Grade, GraduationYearMonth,
    Institution, JsonApplicantStorage, ListCommand, LoggingError, Model, Name, Phone, Skill,
    StorageError, ViewCommand,
};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "internwatch",
    about = "Track internship applicants from the command line",
    version
)]
struct Cli {
    /// Override the configured applicant data file
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Add a new applicant
    Add(AddArgs),
    /// Edit the applicant at INDEX in the full list
    Edit(EditArgs),
    /// Delete the applicant at INDEX in the full list
    Delete(IndexArgs),
    /// Show every detail of the applicant at INDEX
    View(IndexArgs),
    /// Remove all applicants
    Clear,
    /// List all applicants
    List,
    /// List applicants matching name keywords, skills, a status or a minimum grade
    Find(FindArgs),
}

#[derive(Args, Debug)]
struct AddArgs {
    #[arg(long, value_parser = Name::parse)]
    name: Name,
    #[arg(long, value_parser = Phone::parse)]
    phone: Phone,
    #[arg(long, value_parser = Email::parse)]
    email: Email,
    /// Grade point, 0.00 to 5.00
    #[arg(long, value_parser = Grade::parse)]
    grade: Grade,
    #[arg(long, value_parser = Institution::parse)]
    institution: Institution,
    #[arg(long, value_parser = Course::parse)]
    course: Course,
    /// Expected graduation month as MM/YYYY
    #[arg(long, value_parser = GraduationYearMonth::parse)]
    graduation: GraduationYearMonth,
    /// Defaults to Applied
    #[arg(long, value_parser = ApplicationStatus::parse)]
    status: Option<ApplicationStatus>,
    /// Repeat for several skills
    #[arg(long = "skill", value_parser = Skill::parse)]
    skills: Vec<Skill>,
}

#[derive(Args, Debug)]
struct EditArgs {
    #[arg(value_parser = parse_index)]
    index: DisplayIndex,
    #[arg(long, value_parser = Name::parse)]
    name: Option<Name>,
    #[arg(long, value_parser = Phone::parse)]
    phone: Option<Phone>,
    #[arg(long, value_parser = Email::parse)]
    email: Option<Email>,
    #[arg(long, value_parser = Grade::parse)]
    grade: Option<Grade>,
    #[arg(long, value_parser = Institution::parse)]
    institution: Option<Institution>,
    #[arg(long, value_parser = Course::parse)]
    course: Option<Course>,
    #[arg(long, value_parser = GraduationYearMonth::parse)]
    graduation: Option<GraduationYearMonth>,
    #[arg(long, value_parser = ApplicationStatus::parse)]
    status: Option<ApplicationStatus>,
    /// Replaces the whole skill set; repeat for several skills
    #[arg(long = "skill", value_parser = Skill::parse)]
    skills: Vec<Skill>,
    /// Remove every skill
    #[arg(long, conflicts_with = "skills")]
    clear_skills: bool,
}

impl EditArgs {
    fn into_edit(self) -> (DisplayIndex, EditApplicantDescriptor) {
        let skills = if self.clear_skills || !self.skills.is_empty() {
            Some(self.skills.into_iter().collect())
        } else {
            None
        };
        let descriptor = EditApplicantDescriptor {
            name: self.name,
            phone: self.phone,
            email: self.email,
            grade: self.grade,
            institution: self.institution,
            course: self.course,
            graduation_year_month: self.graduation,
            status: self.status,
            skills,
        };
        (self.index, descriptor)
    }
}

#[derive(Args, Debug)]
struct IndexArgs {
    #[arg(value_parser = parse_index)]
    index: DisplayIndex,
}

#[derive(Args, Debug)]
struct FindArgs {
    /// Whole-word name keywords, case-insensitive
    keywords: Vec<String>,
    #[arg(long = "skill", value_parser = Skill::parse)]
    skills: Vec<Skill>,
    #[arg(long, value_parser = ApplicationStatus::parse)]
    status: Option<ApplicationStatus>,
    /// Only applicants with at least this grade
    #[arg(long, value_parser = Grade::parse)]
    min_grade: Option<Grade>,
}

#[derive(Debug)]
pub(crate) enum CliError {
    Config(ConfigError),
    Logging(LoggingError),
    Storage(StorageError),
    Command(CommandError),
    EmptySearch,
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "configuration error: {err}"),
            Self::Logging(err) => write!(f, "logging error: {err}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::Command(err) => write!(f, "{err}"),
            Self::EmptySearch => {
                f.write_str("find needs at least one keyword, --skill, --status or --min-grade")
            }
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Logging(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::Command(err) => Some(err),
            Self::EmptySearch => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<LoggingError> for CliError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

impl From<StorageError> for CliError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<CommandError> for CliError {
    fn from(value: CommandError) -> Self {
        Self::Command(value)
    }
}

pub(crate) fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    if let Some(log_dir) = &config.log_dir {
        init_logging(config.log_level, log_dir)?;
    }
    info!(
        "event=cli_start module=cli status=ok core_version={}",
        internwatch_core::core_version()
    );

    let storage = JsonApplicantStorage::new(cli.data_file.unwrap_or(config.data_file));
    let book = storage.read()?.unwrap_or_default();
    let mut model = Model::new(book, config.history_limit);

    let lists_view = matches!(cli.command, CliCommand::List | CliCommand::Find(_));
    let command = build_command(cli.command)?;

    let before = model.book().clone();
    let result = command.execute(&mut model).map_err(|err| {
        error!("event=cli_command module=cli status=error error={:?}", err);
        err
    })?;
    if model.book() != &before {
        storage.save(model.book())?;
    }
    info!(
        "event=cli_command module=cli status=ok total={}",
        model.book().len()
    );

    println!("{}", result.feedback);
    if let Some(applicant) = &result.displayed {
        print_details(applicant);
    }
    if lists_view {
        for (position, applicant) in model.filtered_applicants().iter().enumerate() {
            println!("{}. {}", DisplayIndex::from_zero_based(position), applicant);
        }
    }
    Ok(())
}

fn build_command(command: CliCommand) -> Result<Box<dyn Command>, CliError> {
    let command: Box<dyn Command> = match command {
        CliCommand::Add(args) => Box::new(AddCommand::new(Applicant::with_status(
            args.name,
            args.phone,
            args.email,
            args.grade,
            args.institution,
            args.course,
            args.graduation,
            args.status.unwrap_or_default(),
            args.skills,
        ))),
        CliCommand::Edit(args) => {
            let (index, descriptor) = args.into_edit();
            Box::new(EditCommand::new(index, descriptor))
        }
        CliCommand::Delete(args) => Box::new(DeleteCommand::new(args.index)),
        CliCommand::View(args) => Box::new(ViewCommand::new(args.index)),
        CliCommand::Clear => Box::new(ClearCommand),
        CliCommand::List => Box::new(ListCommand),
        CliCommand::Find(args) => Box::new(FindCommand::new(find_predicate(args)?)),
    };
    Ok(command)
}

fn find_predicate(args: FindArgs) -> Result<ApplicantPredicate, CliError> {
    let mut parts = Vec::new();
    if !args.keywords.is_empty() {
        parts.push(ApplicantPredicate::NameContainsKeywords(args.keywords));
    }
    if !args.skills.is_empty() {
        parts.push(ApplicantPredicate::HasAnySkill(args.skills));
    }
    if let Some(status) = args.status {
        parts.push(ApplicantPredicate::StatusIs(status));
    }
    if let Some(minimum) = args.min_grade {
        parts.push(ApplicantPredicate::GradeAtLeast(minimum));
    }
    match parts.len() {
        0 => Err(CliError::EmptySearch),
        1 => Ok(parts.remove(0)),
        _ => Ok(ApplicantPredicate::AllOf(parts)),
    }
}

fn parse_index(value: &str) -> Result<DisplayIndex, String> {
    value
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(DisplayIndex::from_one_based)
        .ok_or_else(|| "index must be a positive integer".to_string())
}

fn print_details(applicant: &Applicant) {
    println!("Name: {}", applicant.name());
    println!("Status: {}", applicant.status());
    println!("Phone: {}", applicant.phone());
    println!("Email: {}", applicant.email());
    for (label, value) in ["Institution", "Course", "Graduation", "Grade"]
        .iter()
        .zip(applicant.academics())
    {
        println!("{label}: {value}");
    }
    let skills: Vec<&str> = applicant.skills().iter().map(Skill::as_str).collect();
    println!("Skills: {}", skills.join(", "));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn index_must_be_positive() {
        assert_eq!(parse_index("2").unwrap().one_based(), 2);
        assert!(parse_index("0").is_err());
        assert!(parse_index("-1").is_err());
        assert!(parse_index("two").is_err());
    }

    #[test]
    fn find_combines_filters() {
        let cli = Cli::parse_from(["internwatch", "find", "alice", "--status", "offered"]);
        let CliCommand::Find(args) = cli.command else {
            panic!("expected find");
        };
        let predicate = find_predicate(args).unwrap();
        assert!(matches!(predicate, ApplicantPredicate::AllOf(ref parts) if parts.len() == 2));
    }

    #[test]
    fn find_without_filters_is_rejected() {
        let cli = Cli::parse_from(["internwatch", "find"]);
        let CliCommand::Find(args) = cli.command else {
            panic!("expected find");
        };
        assert!(matches!(find_predicate(args), Err(CliError::EmptySearch)));
    }

    #[test]
    fn invalid_field_is_rejected_at_parse_time() {
        let parsed = Cli::try_parse_from([
            "internwatch",
            "add",
            "--name",
            "Amy",
            "--phone",
            "12",
            "--email",
            "amy@gmail.com",
            "--grade",
            "4.00",
            "--institution",
            "NTU",
            "--course",
            "CS",
            "--graduation",
            "06/2024",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn edit_clear_skills_yields_empty_set() {
        let cli = Cli::parse_from(["internwatch", "edit", "1", "--clear-skills"]);
        let CliCommand::Edit(args) = cli.command else {
            panic!("expected edit");
        };
        let (index, descriptor) = args.into_edit();
        assert_eq!(index.one_based(), 1);
        assert_eq!(descriptor.skills, Some(BTreeSet::new()));
        assert!(descriptor.is_any_field_edited());
    }

    #[test]
    fn edit_without_skill_flags_leaves_skills_untouched() {
        let cli = Cli::parse_from(["internwatch", "edit", "2", "--phone", "91234567"]);
        let CliCommand::Edit(args) = cli.command else {
            panic!("expected edit");
        };
        let (_, descriptor) = args.into_edit();
        assert_eq!(descriptor.skills, None);
        assert_eq!(descriptor.phone.map(String::from), Some("91234567".to_string()));
    }

    #[test]
    fn find_accepts_minimum_grade() {
        let cli = Cli::parse_from(["internwatch", "find", "--min-grade", "4.00"]);
        let CliCommand::Find(args) = cli.command else {
            panic!("expected find");
        };
        assert!(matches!(
            find_predicate(args).unwrap(),
            ApplicantPredicate::GradeAtLeast(ref grade) if grade.as_str() == "4.00"
        ));
    }
}
