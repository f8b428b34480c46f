use crate::config::toml_config::TomlConfig;
use crate::config::TranslatorConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "sinhala-translit")]
#[command(about = "Transliterate romanized Sinhala into Sinhala script via Azure Translator")]
pub struct CliConfig {
    /// Texts to transliterate; read one per line from stdin when omitted
    pub texts: Vec<String>,

    /// TOML file with a [translator] section; the AZURE_* variables are used otherwise
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn load_toml(&self) -> Result<Option<TomlConfig>> {
        self.config.as_ref().map(TomlConfig::from_file).transpose()
    }

    pub fn translator_config(&self, toml: Option<TomlConfig>) -> TranslatorConfig {
        match toml {
            Some(toml) => toml.into_translator_config(),
            None => TranslatorConfig::from_env(),
        }
    }

    pub fn read_texts<R: BufRead>(&self, input: R) -> Result<Vec<String>> {
        if !self.texts.is_empty() {
            return Ok(self.texts.clone());
        }

        let mut texts = Vec::new();
        for line in input.lines() {
            texts.push(line?);
        }
        Ok(texts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let cli = CliConfig::parse_from(["sinhala-translit", "-v", "kohomada", "oyage nama"]);
        assert!(cli.verbose);
        assert!(!cli.json_logs);
        assert_eq!(cli.texts, vec!["kohomada", "oyage nama"]);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_args_take_precedence_over_stdin() {
        let cli = CliConfig::parse_from(["sinhala-translit", "amma"]);
        let texts = cli.read_texts("ignored\n".as_bytes()).unwrap();
        assert_eq!(texts, vec!["amma"]);
    }

    #[test]
    fn test_reads_stdin_lines_verbatim() {
        let cli = CliConfig::parse_from(["sinhala-translit"]);
        let texts = cli.read_texts("kohomada\n  oyage nama \n\n".as_bytes()).unwrap();
        assert_eq!(texts, vec!["kohomada", "  oyage nama ", ""]);
    }

    #[test]
    fn test_toml_config_wins_over_environment() {
        let cli = CliConfig::parse_from(["sinhala-translit", "--config", "unused.toml"]);
        let toml = TomlConfig::from_toml_str(
            "[translator]\nendpoint = \"http://localhost:1\"\nkey = \"k\"\nregion = \"r\"\n",
        )
        .unwrap();

        let config = cli.translator_config(Some(toml));
        assert_eq!(config, TranslatorConfig::new("http://localhost:1", "k", "r"));
    }
}
