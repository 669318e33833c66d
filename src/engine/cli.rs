//! CLI command handler: copy by default; --count scans only; --dry-run writes nothing.

use anyhow::Result;
use log::{debug, info, warn};
use std::path::Path;

use crate::engine::arg_parser::Cli;
use crate::engine::progress::TerminalSink;
use crate::engine::tagging::SkipTags;
use crate::utils::{Colors, apply_file_to_opts, load_albumflat_toml, setup_logging};
use crate::{Opts, Report, flatten_album};

/// Directory searched for the settings file: the source itself, or its parent for a single file.
fn config_dir(src: &Path) -> &Path {
    if src.is_file() {
        src.parent().unwrap_or(Path::new("."))
    } else {
        src
    }
}

/// Overwrite opts field from CLI when given.
macro_rules! apply_cli_opt {
    ($cli:expr, $opts:expr, $cli_field:ident => $opts_field:ident) => {
        if let Some(v) = $cli.$cli_field {
            $opts.$opts_field = v;
        }
    };
}

/// Defaults, then `.albumflat.toml` from the source directory, then CLI flags.
pub fn setup_opts(cli: &Cli) -> Opts {
    let mut opts = Opts::default();
    if let Some(file) = load_albumflat_toml(config_dir(&cli.src)) {
        debug!("Loaded settings file from {}", config_dir(&cli.src).display());
        apply_file_to_opts(&file, &mut opts);
    }
    apply_cli_opt!(cli, opts, verbose => verbose);
    apply_cli_opt!(cli, opts, drop_tracknumber => drop_track_number);
    apply_cli_opt!(cli, opts, strip_decorations => strip_decorations);
    apply_cli_opt!(cli, opts, sort_lex => sort_lex);
    apply_cli_opt!(cli, opts, tree_dst => tree_dst);
    apply_cli_opt!(cli, opts, drop_dst => drop_dst);
    apply_cli_opt!(cli, opts, reverse => reverse);
    apply_cli_opt!(cli, opts, overwrite => overwrite);
    apply_cli_opt!(cli, opts, prepend_subdir_name => prepend_subdir_name);
    apply_cli_opt!(cli, opts, file_title => file_title);
    apply_cli_opt!(cli, opts, file_title_num => file_title_num);
    opts.dry_run = cli.dry_run;
    opts.count_only = cli.count;
    if cli.file_type.is_some() {
        opts.file_type = cli.file_type.clone();
    }
    if cli.unified_name.is_some() {
        opts.unified_name = cli.unified_name.clone();
    }
    if cli.artist.is_some() {
        opts.artist = cli.artist.clone();
    }
    if cli.album.is_some() {
        opts.album = cli.album.clone();
    }
    if cli.album_num.is_some() {
        opts.album_num = cli.album_num;
    }
    opts
}

/// Run a copy (default), a dry run, or a count.
pub fn handle_run(cli: &Cli) -> Result<()> {
    let opts = setup_opts(cli);
    setup_logging(opts.verbose);
    if opts.dry_run && !opts.count_only {
        warn!(
            "{}",
            Colors::colorize(
                Colors::DRY_RUN,
                "RUNNING IN DRY-RUN MODE. NO FILES OR DIRECTORIES WILL BE WRITTEN."
            )
        );
    }
    let mut sink = TerminalSink::new(opts.verbose);
    let report = flatten_album(&cli.src, &cli.dst, &opts, &mut sink, &mut SkipTags)?;
    report_diagnostics(&report);
    Ok(())
}

fn report_diagnostics(report: &Report) {
    if let Some(dst) = &report.destination {
        debug!(
            "{}",
            Colors::colorize(Colors::TRACK, &format!("Destination: {}", dst.display()))
        );
    }
    if report.diagnostics.is_empty() {
        return;
    }
    warn!(
        "{}",
        Colors::colorize(
            Colors::FOREIGN,
            &format!("{} foreign file(s) left out:", report.diagnostics.len())
        )
    );
    for line in &report.diagnostics {
        info!("  {}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn cli_for(src: &Path, extra: &[&str]) -> Cli {
        let src = src.to_string_lossy().into_owned();
        let args = ["albumflat", src.as_str(), "/tmp"]
            .into_iter()
            .chain(extra.iter().copied());
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn settings_file_sets_verbosity() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(".albumflat.toml"),
            "[settings]\nverbose = true\nfile_title = true\n",
        )
        .unwrap();
        let opts = setup_opts(&cli_for(tmp.path(), &[]));
        assert!(opts.verbose);
        assert!(opts.file_title);
    }

    #[test]
    fn cli_overrides_settings_file() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(".albumflat.toml"),
            "[settings]\nverbose = true\nreverse = true\n",
        )
        .unwrap();
        let opts = setup_opts(&cli_for(tmp.path(), &["--verbose=false", "-F", "-y"]));
        assert!(!opts.verbose);
        assert!(opts.reverse);
        assert!(opts.file_title_num);
        assert!(opts.dry_run);
    }
}
