use std::process::ExitCode;

use clap::{Arg, ArgAction, Command};
use redmine_schema::catalog;
use redmine_schema::config::Config;
use redmine_schema::db::inspect::{self, SchemaReport};
use redmine_schema::db::models::Project;
use redmine_schema::db::repositories::ProjectRepo;
use redmine_schema::db::{self, tree};
use redmine_schema::{AppError, AppResult};

fn cli() -> Command {
    Command::new("redmine-schema")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect the Redmine schema mapping and a live Redmine database")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("tables").about("List every mapped table with its column count"))
        .subcommand(
            Command::new("check")
                .about("Compare a live database with the mapping")
                .arg(
                    Arg::new("schema")
                        .short('s')
                        .long("schema")
                        .value_name("NAME")
                        .help("Postgres schema to inspect (defaults to DATABASE_SCHEMA)"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the report as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("projects")
                .about("Print projects in tree order")
                .arg(
                    Arg::new("root")
                        .short('r')
                        .long("root")
                        .value_name("ID")
                        .value_parser(clap::value_parser!(i32))
                        .help("Only print the subtree under this project"),
                ),
        )
}

fn main() -> ExitCode {
    let matches = cli().get_matches();

    let result = match matches.subcommand() {
        Some(("tables", _)) => {
            print_tables();
            Ok(ExitCode::SUCCESS)
        }
        Some(("check", sub)) => run_check(
            sub.get_one::<String>("schema").map(String::as_str),
            sub.get_flag("json"),
        ),
        Some(("projects", sub)) => run_projects(sub.get_one::<i32>("root").copied()),
        _ => Ok(ExitCode::FAILURE),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> AppResult<Config> {
    let config = Config::from_env()?;
    redmine_schema::init_tracing(&config);
    Ok(config)
}

fn print_tables() {
    for table in catalog::tables() {
        println!("{:<40} {:>3} columns", table.name, table.columns.len());
    }
    println!("{} tables", catalog::tables().len());
}

fn run_check(schema: Option<&str>, json: bool) -> AppResult<ExitCode> {
    let config = load_config()?;
    let schema = schema.unwrap_or(&config.database_schema).to_string();
    let mut conn = db::establish(&config)?;
    let report = inspect::check(&mut conn, &schema)?;

    if json {
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| AppError::Config(format!("cannot encode report: {}", e)))?;
        println!("{}", out);
    } else {
        print_report(&report);
    }

    Ok(if report.is_compatible() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_report(report: &SchemaReport) {
    println!("schema {}: {} tables checked", report.schema, report.checked_tables);
    for table in &report.missing_tables {
        println!("  missing table   {}", table);
    }
    for col in &report.missing_columns {
        println!("  missing column  {}.{}", col.table, col.column);
    }
    for m in &report.nullability_mismatches {
        println!(
            "  nullability     {}.{} expected {} found {}",
            m.table,
            m.column,
            if m.expected_nullable { "NULL" } else { "NOT NULL" },
            if m.actual_nullable { "NULL" } else { "NOT NULL" },
        );
    }
    for m in report.type_mismatches.iter().chain(&report.length_mismatches) {
        println!("  type            {}.{} expected {} found {}", m.table, m.column, m.expected, m.actual);
    }
    for col in &report.extra_columns {
        println!("  extra column    {}.{}", col.table, col.column);
    }
    for fk in &report.foreign_key_issues {
        println!(
            "  reference       {}.{} -> {} {}",
            fk.table,
            fk.column,
            fk.references,
            fk.delete_rule.as_deref().unwrap_or("not enforced")
        );
    }
    println!(
        "{}",
        if report.is_compatible() {
            "compatible"
        } else {
            "INCOMPATIBLE"
        }
    );
}

fn run_projects(root: Option<i32>) -> AppResult<ExitCode> {
    let config = load_config()?;
    let mut conn = db::establish(&config)?;
    let projects = match root {
        Some(root_id) => ProjectRepo::subtree(&mut conn, root_id)?,
        None => ProjectRepo::list_in_tree_order(&mut conn)?,
    };

    let (numbered, unnumbered): (Vec<&Project>, Vec<&Project>) =
        projects.iter().partition(|p| p.bounds().is_some());
    let bounds: Vec<_> = numbered.iter().filter_map(|p| p.bounds()).collect();
    for (project, depth) in numbered.iter().zip(tree::depths(&bounds)) {
        println!("{}{} (#{})", "  ".repeat(depth), project.name, project.id);
    }
    for project in unnumbered {
        println!("{} (#{}, not numbered)", project.name, project.id);
    }
    Ok(ExitCode::SUCCESS)
}
