//! Built-in roles and functions

use super::capabilities::{
    CLOSURE, COSTING_PRICING, FINANCIAL_MANAGEMENT, FUNDING_OPPORTUNITIES, IMPACT, INITIATION,
    PROJECT_DELIVERY, PROPOSAL_DEVELOPMENT, RESEARCH_ENGAGEMENT, RESEARCH_INTEGRITY,
};
use crate::level::ProficiencyLevel::{Advanced, Exemplar, Foundation, Intermediate};
use crate::role::RoleMapping;

/// Role id for contract administrator
pub const CONTRACT_ADMINISTRATOR: &str = "contract-administrator";
/// Role id for research development manager
pub const RESEARCH_DEVELOPMENT_MANAGER: &str = "research-development-manager";
/// Role id for pre-award officer
pub const PRE_AWARD_OFFICER: &str = "pre-award-officer";
/// Role id for post-award finance officer
pub const POST_AWARD_FINANCE_OFFICER: &str = "post-award-finance-officer";
/// Role id for head of research office
pub const HEAD_OF_RESEARCH_OFFICE: &str = "head-of-research-office";

/// Function id for pre-award
pub const PRE_AWARD: &str = "pre-award";
/// Function id for post-award
pub const POST_AWARD: &str = "post-award";
/// Function id for contracts
pub const CONTRACTS: &str = "contracts";
/// Function id for research development
pub const RESEARCH_DEVELOPMENT: &str = "research-development";
/// Function id for knowledge exchange
pub const KNOWLEDGE_EXCHANGE: &str = "knowledge-exchange";

pub(crate) fn roles() -> Vec<RoleMapping> {
    vec![
        RoleMapping::new(CONTRACT_ADMINISTRATOR, "Contract Administrator")
            .with_description("Reviews, negotiates and manages research agreements.")
            .requires(INITIATION, Advanced)
            .requires(COSTING_PRICING, Intermediate)
            .requires(RESEARCH_INTEGRITY, Intermediate)
            .requires(PROJECT_DELIVERY, Foundation)
            .requires(CLOSURE, Foundation),
        RoleMapping::new(RESEARCH_DEVELOPMENT_MANAGER, "Research Development Manager")
            .with_description("Develops research strategy and large funding bids.")
            .requires(RESEARCH_ENGAGEMENT, Advanced)
            .requires(FUNDING_OPPORTUNITIES, Advanced)
            .requires(PROPOSAL_DEVELOPMENT, Advanced)
            .requires(IMPACT, Intermediate),
        RoleMapping::new(PRE_AWARD_OFFICER, "Pre-Award Officer")
            .with_description("Supports researchers from idea to submission.")
            .requires(RESEARCH_ENGAGEMENT, Intermediate)
            .requires(FUNDING_OPPORTUNITIES, Intermediate)
            .requires(PROPOSAL_DEVELOPMENT, Intermediate)
            .requires(COSTING_PRICING, Intermediate)
            .requires(RESEARCH_INTEGRITY, Foundation),
        RoleMapping::new(POST_AWARD_FINANCE_OFFICER, "Post-Award Finance Officer")
            .with_description("Manages award finances from set-up to close.")
            .requires(INITIATION, Intermediate)
            .requires(FINANCIAL_MANAGEMENT, Advanced)
            .requires(PROJECT_DELIVERY, Intermediate)
            .requires(CLOSURE, Intermediate),
        RoleMapping::new(HEAD_OF_RESEARCH_OFFICE, "Head of Research Office")
            .with_description("Leads research support services for the institution.")
            .requires(RESEARCH_ENGAGEMENT, Exemplar)
            .requires(FUNDING_OPPORTUNITIES, Advanced)
            .requires(INITIATION, Advanced)
            .requires(FINANCIAL_MANAGEMENT, Advanced)
            .requires(RESEARCH_INTEGRITY, Exemplar)
            .requires(IMPACT, Advanced),
    ]
}

pub(crate) fn functions() -> Vec<RoleMapping> {
    vec![
        RoleMapping::new(PRE_AWARD, "Pre-Award")
            .requires(FUNDING_OPPORTUNITIES, Intermediate)
            .requires(PROPOSAL_DEVELOPMENT, Intermediate)
            .requires(COSTING_PRICING, Intermediate),
        RoleMapping::new(POST_AWARD, "Post-Award")
            .requires(PROJECT_DELIVERY, Intermediate)
            .requires(FINANCIAL_MANAGEMENT, Intermediate)
            .requires(CLOSURE, Intermediate),
        RoleMapping::new(CONTRACTS, "Contracts")
            .requires(INITIATION, Advanced)
            .requires(RESEARCH_INTEGRITY, Intermediate),
        RoleMapping::new(RESEARCH_DEVELOPMENT, "Research Development")
            .requires(RESEARCH_ENGAGEMENT, Advanced)
            .requires(FUNDING_OPPORTUNITIES, Advanced)
            .requires(PROPOSAL_DEVELOPMENT, Advanced),
        RoleMapping::new(KNOWLEDGE_EXCHANGE, "Knowledge Exchange")
            .with_description("Translating research into impact beyond academia.")
            .requires(RESEARCH_ENGAGEMENT, Intermediate)
            .requires(IMPACT, Advanced),
    ]
}
