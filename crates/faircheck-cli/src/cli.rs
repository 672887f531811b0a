//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// FairCheck - Retrieval-grounded fair-competition pre-review.
#[derive(Debug, Parser)]
#[command(name = "faircheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path (defaults to ~/.faircheck/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Submit a pre-review request and print the grounded ruling
    Review(ReviewArgs),

    /// Show which statutes and cases the local filter would match
    Retrieve(RetrieveArgs),

    /// Show the configuration path and (redacted) contents
    Config,
}

/// Review category. Selecting one is mandatory on submission; there is no
/// "unselected" sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Category {
    /// 요금제/부가서비스 출시
    Pricing,
    /// 표시광고
    Advertising,
    /// 신규사업 추진
    NewBusiness,
    /// 계열사 거래
    AffiliateTrade,
    /// 사업 합리화
    Rationalization,
    /// 기타
    Other,
}

impl Category {
    /// The exact tag string this category matches against case tag sets.
    pub fn tag(&self) -> &'static str {
        match self {
            Category::Pricing => "요금제/부가서비스 출시",
            Category::Advertising => "표시광고",
            Category::NewBusiness => "신규사업 추진",
            Category::AffiliateTrade => "계열사 거래",
            Category::Rationalization => "사업 합리화",
            Category::Other => "기타",
        }
    }
}

/// Service the submission concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Service {
    /// 모바일
    Mobile,
    /// 인터넷
    Internet,
    /// IPTV
    Iptv,
    /// SOIP(인터넷전화)
    Soip,
    /// PSTN(유선전화)
    Pstn,
    /// WIBRO
    Wibro,
    /// 전용회선
    LeasedLine,
    /// 기타
    Other,
}

impl Service {
    /// Display label for the service.
    pub fn label(&self) -> &'static str {
        match self {
            Service::Mobile => "모바일",
            Service::Internet => "인터넷",
            Service::Iptv => "IPTV",
            Service::Soip => "SOIP(인터넷전화)",
            Service::Pstn => "PSTN(유선전화)",
            Service::Wibro => "WIBRO",
            Service::LeasedLine => "전용회선",
            Service::Other => "기타",
        }
    }
}

/// Arguments for the review command.
#[derive(Debug, Parser)]
pub struct ReviewArgs {
    /// Submission title
    #[arg(short, long)]
    pub title: String,

    /// Review category
    #[arg(short = 'g', long, value_enum)]
    pub category: Category,

    /// Service name
    #[arg(short, long, value_enum)]
    pub service: Service,

    /// Submission content (inline)
    #[arg(short = 'c', long)]
    pub content: Option<String>,

    /// Read submission content from a file
    #[arg(short = 'f', long, conflicts_with = "content")]
    pub content_file: Option<PathBuf>,
}

/// Arguments for the retrieve command.
#[derive(Debug, Parser)]
pub struct RetrieveArgs {
    /// Query text to filter the corpus with
    pub text: String,

    /// Optional category; when given, cases must carry this tag exactly
    #[arg(short = 'g', long, value_enum)]
    pub category: Option<Category>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_category_tags_match_corpus_vocabulary() {
        assert_eq!(Category::Advertising.tag(), "표시광고");
        assert_eq!(Category::NewBusiness.tag(), "신규사업 추진");
        assert_eq!(Category::Pricing.tag(), "요금제/부가서비스 출시");
    }

    #[test]
    fn test_review_requires_category_and_service() {
        let result = Cli::try_parse_from(["faircheck", "review", "--title", "t", "-c", "내용"]);
        assert!(result.is_err());

        let result = Cli::try_parse_from([
            "faircheck", "review", "--title", "t", "-g", "advertising", "-s", "mobile", "-c",
            "내용",
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_retrieve_category_is_optional() {
        let cli = Cli::try_parse_from(["faircheck", "retrieve", "환불 정책"]).unwrap();
        match cli.command {
            Command::Retrieve(args) => {
                assert_eq!(args.text, "환불 정책");
                assert!(args.category.is_none());
            }
            _ => panic!("expected retrieve command"),
        }
    }

    #[test]
    fn test_content_and_content_file_conflict() {
        let result = Cli::try_parse_from([
            "faircheck", "review", "--title", "t", "-g", "other", "-s", "other", "-c", "내용",
            "-f", "body.txt",
        ]);
        assert!(result.is_err());
    }
}
