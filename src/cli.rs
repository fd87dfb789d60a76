use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::fmt;

/// Joke themes, in the order their flags are declared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Geek,
    Nerd,
    Sport,
    Running,
    Dad,
    Animal,
    Tech,
    Programmer,
    Math,
    Science,
    Food,
    Doctor,
    Lawyer,
    Political,
    Blonde,
    KnockKnock,
    School,
    Music,
    Movie,
    History,
    Relationship,
    Work,
    Travel,
    Pun,
}

impl Category {
    pub const ALL: [Category; 24] = [
        Category::Geek,
        Category::Nerd,
        Category::Sport,
        Category::Running,
        Category::Dad,
        Category::Animal,
        Category::Tech,
        Category::Programmer,
        Category::Math,
        Category::Science,
        Category::Food,
        Category::Doctor,
        Category::Lawyer,
        Category::Political,
        Category::Blonde,
        Category::KnockKnock,
        Category::School,
        Category::Music,
        Category::Movie,
        Category::History,
        Category::Relationship,
        Category::Work,
        Category::Travel,
        Category::Pun,
    ];

    /// Label used in the prompt text
    pub fn label(self) -> &'static str {
        match self {
            Category::Geek => "geek",
            Category::Nerd => "nerd",
            Category::Sport => "sport",
            Category::Running => "running",
            Category::Dad => "dad",
            Category::Animal => "animal",
            Category::Tech => "tech",
            Category::Programmer => "programmer",
            Category::Math => "math",
            Category::Science => "science",
            Category::Food => "food",
            Category::Doctor => "doctor",
            Category::Lawyer => "lawyer",
            Category::Political => "political",
            Category::Blonde => "blonde",
            Category::KnockKnock => "knock-knock",
            Category::School => "school",
            Category::Music => "music",
            Category::Movie => "movie",
            Category::History => "history",
            Category::Relationship => "relationship",
            Category::Work => "work",
            Category::Travel => "travel",
            Category::Pun => "pun",
        }
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        self.label()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Short flags are only given to a category whose first letter is not
// already taken by an earlier category or by -h.
#[derive(Parser, Debug)]
#[command(
    name = "jokeapp",
    about = "Tell a short joke, generated by DeepSeek",
    long_about = "Asks the DeepSeek chat API for a short joke. Pick one or more category flags to theme it; with none, the joke is random. The API key is read from ~/.jokeapp.yaml and requested interactively the first time.",
    version,
    disable_help_flag = true
)]
pub struct Cli {
    /// Show help
    #[arg(short, long)]
    pub help: bool,

    /// Geek joke
    #[arg(short, long)]
    pub geek: bool,

    /// Nerd joke
    #[arg(short, long)]
    pub nerd: bool,

    /// Sport joke
    #[arg(short, long)]
    pub sport: bool,

    /// Running joke
    #[arg(short, long)]
    pub running: bool,

    /// Dad joke
    #[arg(short, long)]
    pub dad: bool,

    /// Animal joke
    #[arg(short, long)]
    pub animal: bool,

    /// Tech joke
    #[arg(short, long)]
    pub tech: bool,

    /// Programmer joke
    #[arg(short, long)]
    pub programmer: bool,

    /// Math joke
    #[arg(short, long)]
    pub math: bool,

    /// Science joke
    #[arg(long)]
    pub science: bool,

    /// Food joke
    #[arg(short, long)]
    pub food: bool,

    /// Doctor joke
    #[arg(long)]
    pub doctor: bool,

    /// Lawyer joke
    #[arg(short, long)]
    pub lawyer: bool,

    /// Political joke
    #[arg(long)]
    pub political: bool,

    /// Blonde joke
    #[arg(short, long)]
    pub blonde: bool,

    /// Knock-knock joke
    #[arg(short, long)]
    pub knock_knock: bool,

    /// School joke
    #[arg(long)]
    pub school: bool,

    /// Music joke
    #[arg(long)]
    pub music: bool,

    /// Movie joke
    #[arg(long)]
    pub movie: bool,

    /// History joke
    #[arg(long)]
    pub history: bool,

    /// Relationship joke
    #[arg(long)]
    pub relationship: bool,

    /// Work joke
    #[arg(short, long)]
    pub work: bool,

    /// Travel joke
    #[arg(long)]
    pub travel: bool,

    /// Pun
    #[arg(long)]
    pub pun: bool,
}

impl Cli {
    pub fn try_parse_args<I, T>(args: I) -> crate::error::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(Self::try_parse_from(args)?)
    }

    fn is_selected(&self, category: Category) -> bool {
        match category {
            Category::Geek => self.geek,
            Category::Nerd => self.nerd,
            Category::Sport => self.sport,
            Category::Running => self.running,
            Category::Dad => self.dad,
            Category::Animal => self.animal,
            Category::Tech => self.tech,
            Category::Programmer => self.programmer,
            Category::Math => self.math,
            Category::Science => self.science,
            Category::Food => self.food,
            Category::Doctor => self.doctor,
            Category::Lawyer => self.lawyer,
            Category::Political => self.political,
            Category::Blonde => self.blonde,
            Category::KnockKnock => self.knock_knock,
            Category::School => self.school,
            Category::Music => self.music,
            Category::Movie => self.movie,
            Category::History => self.history,
            Category::Relationship => self.relationship,
            Category::Work => self.work,
            Category::Travel => self.travel,
            Category::Pun => self.pun,
        }
    }

    /// Selected categories in declaration order, whatever order the flags
    /// were given in
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.is_selected(*c))
            .collect()
    }

    /// Usage listing of every flag
    pub fn usage() -> String {
        Self::command().render_help().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("jokeapp").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_flags() {
        let cli = parse(&[]);
        assert!(!cli.help);
        assert!(cli.categories().is_empty());
    }

    #[test]
    fn test_single_category_flag() {
        let cli = parse(&["-g"]);
        assert_eq!(cli.categories(), vec![Category::Geek]);
    }

    #[test]
    fn test_multiple_category_flags() {
        let cli = parse(&["-g", "-n", "-s"]);
        let labels: Vec<_> = cli.categories().into_iter().map(Category::label).collect();
        assert_eq!(labels, vec!["geek", "nerd", "sport"]);
    }

    #[test]
    fn test_categories_follow_declaration_order() {
        let cli = parse(&["--pun", "-s", "--history", "-g"]);
        assert_eq!(
            cli.categories(),
            vec![
                Category::Geek,
                Category::Sport,
                Category::History,
                Category::Pun
            ]
        );
    }

    #[test]
    fn test_combined_short_flags() {
        let cli = parse(&["-gk"]);
        assert_eq!(cli.categories(), vec![Category::Geek, Category::KnockKnock]);
    }

    #[test]
    fn test_help_flag() {
        assert!(parse(&["-h"]).help);
        assert!(parse(&["--help"]).help);
    }

    #[test]
    fn test_help_flag_with_categories() {
        let cli = parse(&["-g", "-h", "--school"]);
        assert!(cli.help);
    }

    #[test]
    fn test_long_only_categories() {
        let cli = parse(&[
            "--science",
            "--doctor",
            "--political",
            "--school",
            "--music",
            "--movie",
            "--history",
            "--relationship",
            "--travel",
            "--pun",
        ]);
        assert_eq!(
            cli.categories(),
            vec![
                Category::Science,
                Category::Doctor,
                Category::Political,
                Category::School,
                Category::Music,
                Category::Movie,
                Category::History,
                Category::Relationship,
                Category::Travel,
                Category::Pun,
            ]
        );
    }

    #[test]
    fn test_every_category_has_a_long_flag() {
        for category in Category::ALL {
            let flag = format!("--{}", category.label());
            let cli = parse(&[flag.as_str()]);
            assert_eq!(cli.categories(), vec![category], "flag {}", flag);
        }
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let err = Cli::try_parse_from(["jokeapp", "-x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_positional_argument_is_rejected() {
        assert!(Cli::try_parse_from(["jokeapp", "geek"]).is_err());
    }

    #[test]
    fn test_usage_lists_every_flag() {
        let usage = Cli::usage();
        assert!(usage.contains("--help"));
        for category in Category::ALL {
            assert!(
                usage.contains(&format!("--{}", category.label())),
                "missing --{}",
                category.label()
            );
        }
    }
}
