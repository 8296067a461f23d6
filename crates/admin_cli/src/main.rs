use std::{error::Error, fs::File, io::Write, path::PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use engine::Engine;
use sea_orm::{Database, DatabaseConnection};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "finance_admin")]
#[command(about = "Admin utilities for the finance tracker (schema, CSV export)")]
struct Cli {
    /// Database connection string (also read from `DATABASE_URL`).
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite:./personalfinance.db?mode=rwc"
    )]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the tables if they are missing.
    Init,
    /// Dump every row of one table as CSV.
    Export(ExportArgs),
}

#[derive(Args, Debug)]
struct ExportArgs {
    table: Table,
    /// Output file. Defaults to stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Table {
    Accounts,
    Transactions,
    Budgets,
}

/// Writes a header row and one row per record.
fn write_csv<W: Write, T: Serialize>(
    writer: W,
    records: &[T],
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let mut writer = csv::Writer::from_writer(writer);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

async fn export(
    engine: &Engine,
    table: Table,
    out: impl Write,
) -> Result<usize, Box<dyn Error + Send + Sync>> {
    let count = match table {
        Table::Accounts => {
            let rows = engine.accounts().get_all_accounts().await?;
            write_csv(out, &rows)?;
            rows.len()
        }
        Table::Transactions => {
            let rows = engine.transactions().get_all_transactions().await?;
            write_csv(out, &rows)?;
            rows.len()
        }
        Table::Budgets => {
            let rows = engine.budgets().get_all_budgets().await?;
            write_csv(out, &rows)?;
            rows.len()
        }
    };
    Ok(count)
}

async fn connect_db(
    database_url: &str,
) -> Result<DatabaseConnection, Box<dyn Error + Send + Sync>> {
    let db = Database::connect(database_url).await?;
    engine::schema::bootstrap(&db).await?;
    Ok(db)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    let db = connect_db(&cli.database_url).await?;

    match cli.command {
        Command::Init => {
            println!("schema ready: {}", cli.database_url);
        }
        Command::Export(args) => {
            let engine = Engine::builder().database(db).build().await?;
            let count = match &args.out {
                Some(path) => export(&engine, args.table, File::create(path)?).await?,
                None => export(&engine, args.table, std::io::stdout().lock()).await?,
            };
            eprintln!("exported {count} {:?} rows", args.table);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use engine::{Account, Budget, Category, Currency, Transaction, TransactionKind};

    use super::*;

    fn csv_of<T: Serialize>(records: &[T]) -> String {
        let mut buf = Vec::new();
        write_csv(&mut buf, records).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn accounts_csv_uses_wire_values() {
        let rows = vec![
            Account::bank(1, "Main".to_string(), Currency::Usd),
            Account::wallet(2, "Cash".to_string(), Currency::Eur),
        ];

        assert_eq!(
            csv_of(&rows),
            "id,name,account_type,currency\n1,Main,Bank,USD\n2,Cash,Wallet,EUR\n"
        );
    }

    #[test]
    fn transactions_csv_has_transaction_type_column() {
        let rows = vec![Transaction::new(
            5,
            1,
            NaiveDate::from_ymd_opt(2024, 4, 9).unwrap(),
            12.5,
            "bus, return".to_string(),
            Category::Transport,
            TransactionKind::Expense,
        )];

        assert_eq!(
            csv_of(&rows),
            "id,account_id,date,amount,description,category,transaction_type\n\
             5,1,2024-04-09,12.5,\"bus, return\",Transport,Expense\n"
        );
    }

    #[test]
    fn budgets_csv() {
        let rows = vec![Budget::new(3, "2024-04".to_string(), Category::Food, 250.0)];

        assert_eq!(
            csv_of(&rows),
            "id,month,category,limit_amount\n3,2024-04,Food,250.0\n"
        );
    }

    #[test]
    fn empty_export_writes_nothing() {
        let rows: Vec<Budget> = Vec::new();
        assert_eq!(csv_of(&rows), "");
    }

    #[tokio::test]
    async fn export_reads_through_engine() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        let engine = Engine::builder().database(db).build().await.unwrap();
        engine
            .budgets()
            .create_budget(engine::NewBudget::new(1, "2024-01", Category::Other, 10.0))
            .await
            .unwrap();

        let mut buf = Vec::new();
        let count = export(&engine, Table::Budgets, &mut buf).await.unwrap();

        assert_eq!(count, 1);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "id,month,category,limit_amount\n1,2024-01,Other,10.0\n"
        );
    }
}
