//! Output of balances and settlements as text, JSON or CSV.

use std::io::Write;

use api_types::report::{BalanceState, BalanceView, Report, SettlementView};
use engine::{
    Balance, BalanceStatus, Balances, GroupSummary, MoneyCents, Settlement, SettlementPlan,
};
use serde::Serialize;

use crate::{
    error::Result,
    settings::{OutputFormat, Settings},
};

fn balance_view(balance: &Balance) -> BalanceView {
    BalanceView {
        person: balance.person.to_string(),
        amount: balance.amount.to_string(),
        amount_minor: balance.amount.cents(),
        status: match balance.status() {
            BalanceStatus::IsOwed => BalanceState::IsOwed,
            BalanceStatus::Owes => BalanceState::Owes,
            BalanceStatus::SettledUp => BalanceState::SettledUp,
        },
    }
}

fn settlement_view(settlement: &Settlement) -> SettlementView {
    SettlementView {
        from: settlement.from.to_string(),
        to: settlement.to.to_string(),
        amount: settlement.amount.to_string(),
        amount_minor: settlement.amount.cents(),
    }
}

#[derive(Serialize)]
struct BalanceRow<'a> {
    person: &'a str,
    amount: String,
    status: &'static str,
}

pub struct Renderer<'a> {
    format: OutputFormat,
    symbol: &'a str,
}

impl<'a> Renderer<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            format: settings.format,
            symbol: settings.currency_symbol.as_str(),
        }
    }

    fn money(&self, amount: MoneyCents) -> String {
        format!("{}{}", self.symbol, amount.abs())
    }

    fn balance_line(&self, balance: &Balance) -> String {
        match balance.status() {
            BalanceStatus::IsOwed => {
                format!("{} is owed +{}", balance.person, self.money(balance.amount))
            }
            BalanceStatus::Owes => {
                format!("{} owes -{}", balance.person, self.money(balance.amount))
            }
            BalanceStatus::SettledUp => format!("{} settled up", balance.person),
        }
    }

    fn write_balance_lines(&self, out: &mut impl Write, balances: &Balances) -> Result<()> {
        for balance in balances {
            writeln!(out, "{}", self.balance_line(balance))?;
        }
        Ok(())
    }

    fn write_settlement_lines(&self, out: &mut impl Write, plan: &SettlementPlan) -> Result<()> {
        if plan.is_empty() {
            writeln!(out, "All balances are settled!")?;
            return Ok(());
        }
        for settlement in plan {
            writeln!(
                out,
                "{} → {} {}",
                settlement.from,
                settlement.to,
                self.money(settlement.amount)
            )?;
        }
        Ok(())
    }

    fn write_json(out: &mut impl Write, value: &impl Serialize) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, value)?;
        writeln!(out)?;
        Ok(())
    }

    fn write_settlement_csv(out: &mut impl Write, plan: &SettlementPlan) -> Result<()> {
        let mut writer = csv::Writer::from_writer(out);
        for settlement in plan {
            writer.serialize(settlement_view(settlement))?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn balances(&self, out: &mut impl Write, balances: &Balances) -> Result<()> {
        match self.format {
            OutputFormat::Text => self.write_balance_lines(out, balances),
            OutputFormat::Json => {
                let views: Vec<BalanceView> = balances.iter().map(balance_view).collect();
                Self::write_json(out, &views)
            }
            OutputFormat::Csv => {
                let mut writer = csv::Writer::from_writer(out);
                for balance in balances {
                    writer.serialize(BalanceRow {
                        person: balance.person.name(),
                        amount: balance.amount.to_string(),
                        status: balance.status().as_str(),
                    })?;
                }
                writer.flush()?;
                Ok(())
            }
        }
    }

    pub fn settlements(&self, out: &mut impl Write, plan: &SettlementPlan) -> Result<()> {
        match self.format {
            OutputFormat::Text => self.write_settlement_lines(out, plan),
            OutputFormat::Json => {
                let views: Vec<SettlementView> = plan.iter().map(settlement_view).collect();
                Self::write_json(out, &views)
            }
            OutputFormat::Csv => Self::write_settlement_csv(out, plan),
        }
    }

    /// Full overview. CSV output only carries the settlement rows.
    pub fn report(&self, out: &mut impl Write, summary: &GroupSummary) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                writeln!(
                    out,
                    "Total group spending: {}",
                    self.money(summary.total_spending)
                )?;
                writeln!(out)?;
                writeln!(out, "Individual balances")?;
                self.write_balance_lines(out, &summary.balances)?;
                writeln!(out)?;
                writeln!(out, "Suggested settlements")?;
                self.write_settlement_lines(out, &summary.settlements)
            }
            OutputFormat::Json => Self::write_json(
                out,
                &Report {
                    currency: self.symbol.to_string(),
                    total_spending: summary.total_spending.to_string(),
                    balances: summary.balances.iter().map(balance_view).collect(),
                    settlements: summary.settlements.iter().map(settlement_view).collect(),
                },
            ),
            OutputFormat::Csv => Self::write_settlement_csv(out, &summary.settlements),
        }
    }
}
