//! Balance and statistics DTOs

use indexmap::IndexMap;
use serde::Serialize;

use domain_split::{BalanceReport, ExpenseSummary, ParticipantStats, Settlement};

use super::Amount;

#[derive(Debug, Serialize)]
pub struct SettlementResponse {
    pub from: String,
    pub to: String,
    pub amount: Amount,
}

impl From<&Settlement> for SettlementResponse {
    fn from(settlement: &Settlement) -> Self {
        Self {
            from: settlement.from.clone(),
            to: settlement.to.clone(),
            amount: settlement.amount.into(),
        }
    }
}

/// Balances in table order, and the plan that settles them
#[derive(Debug, Serialize)]
pub struct BalancesResponse {
    pub balances: IndexMap<String, Amount>,
    pub settlements: Vec<SettlementResponse>,
}

impl From<&BalanceReport> for BalancesResponse {
    fn from(report: &BalanceReport) -> Self {
        Self {
            balances: report
                .balances
                .iter()
                .map(|(name, balance)| (name.to_string(), balance.into()))
                .collect(),
            settlements: report.settlements.iter().map(SettlementResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ParticipantStatsResponse {
    pub paid: Amount,
    pub owes: Amount,
    pub balance: Amount,
}

impl From<&ParticipantStats> for ParticipantStatsResponse {
    fn from(stats: &ParticipantStats) -> Self {
        Self {
            paid: stats.paid.into(),
            owes: stats.owes.into(),
            balance: stats.balance.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub count: usize,
    pub total: Amount,
    pub average: Amount,
    pub by_payer: IndexMap<String, Amount>,
    pub participants: IndexMap<String, ParticipantStatsResponse>,
}

impl From<&ExpenseSummary> for StatsResponse {
    fn from(summary: &ExpenseSummary) -> Self {
        Self {
            count: summary.count,
            total: summary.total.into(),
            average: summary.average.into(),
            by_payer: summary
                .by_payer
                .iter()
                .map(|(name, paid)| (name.clone(), (*paid).into()))
                .collect(),
            participants: summary
                .participants
                .iter()
                .map(|(name, stats)| (name.clone(), stats.into()))
                .collect(),
        }
    }
}
