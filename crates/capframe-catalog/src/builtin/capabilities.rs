//! Built-in capabilities
//!
//! Descriptor lists are append-only: persisted assessments reference
//! descriptors by position.

use crate::capability::{Capability, LevelDescriptor};
use crate::level::ProficiencyLevel::{Advanced, Exemplar, Foundation, Intermediate};

/// Capability id for research engagement
pub const RESEARCH_ENGAGEMENT: &str = "research-engagement";
/// Capability id for funding opportunities
pub const FUNDING_OPPORTUNITIES: &str = "funding-opportunities";
/// Capability id for proposal development
pub const PROPOSAL_DEVELOPMENT: &str = "proposal-development";
/// Capability id for costing and pricing
pub const COSTING_PRICING: &str = "costing-pricing";
/// Capability id for project initiation (contracts and award set-up)
pub const INITIATION: &str = "initiation";
/// Capability id for project delivery
pub const PROJECT_DELIVERY: &str = "project-delivery";
/// Capability id for financial management
pub const FINANCIAL_MANAGEMENT: &str = "financial-management";
/// Capability id for research integrity and compliance
pub const RESEARCH_INTEGRITY: &str = "research-integrity";
/// Capability id for impact and knowledge exchange
pub const IMPACT: &str = "impact";
/// Capability id for closure and reporting
pub const CLOSURE: &str = "closure";

const RDF: &str = "Researcher Development Framework";
const PSF: &str = "Professional Standards Framework";
const ISO: &str = "ISO 21500";

/// All built-in capabilities in display order
pub(crate) fn all() -> Vec<Capability> {
    vec![
        research_engagement(),
        funding_opportunities(),
        proposal_development(),
        costing_pricing(),
        initiation(),
        project_delivery(),
        financial_management(),
        research_integrity(),
        impact(),
        closure(),
    ]
}

fn research_engagement() -> Capability {
    Capability::new(
        RESEARCH_ENGAGEMENT,
        "Research Engagement",
        "Building relationships with researchers and understanding the research \
         landscape in order to support research activity effectively.",
    )
    .with_level(
        LevelDescriptor::new(
            Foundation,
            &[
                "Understands the research activity of the department or unit supported",
                "Responds to researcher queries promptly and signposts to the right expertise",
                "Uses institutional systems to locate researchers and their current projects",
                "Explains the support services available to researchers",
            ],
        )
        .with_alignment(0, "Knowledge of the research environment", &[RDF]),
    )
    .with_level(LevelDescriptor::new(
        Intermediate,
        &[
            "Builds working relationships with research groups across disciplines",
            "Anticipates researcher needs from knowledge of their research plans",
            "Tailors communication to academic and professional audiences",
            "Gathers researcher feedback to improve support services",
        ],
    ))
    .with_level(
        LevelDescriptor::new(
            Advanced,
            &[
                "Acts as a trusted adviser to senior researchers and research leaders",
                "Identifies strategic research strengths and emerging areas of activity",
                "Brokers collaborations between researchers and internal or external partners",
                "Represents the support function in institutional research committees",
            ],
        )
        .with_alignment_statement("Aligned with leadership and influence descriptors"),
    )
    .with_level(LevelDescriptor::new(
        Exemplar,
        &[
            "Shapes institutional research strategy through sustained engagement",
            "Influences sector practice in researcher engagement",
            "Mentors colleagues across institutions in engagement approaches",
        ],
    ))
}

fn funding_opportunities() -> Capability {
    Capability::new(
        FUNDING_OPPORTUNITIES,
        "Funding Opportunities",
        "Identifying, interpreting and disseminating funding opportunities \
         and funder requirements.",
    )
    .with_level(LevelDescriptor::new(
        Foundation,
        &[
            "Searches funder websites and databases for relevant calls",
            "Circulates funding opportunities to the appropriate researchers",
            "Summarises key eligibility criteria and deadlines",
        ],
    ))
    .with_level(LevelDescriptor::new(
        Intermediate,
        &[
            "Interprets funder terms and conditions for researchers",
            "Matches opportunities to researcher profiles and interests",
            "Maintains an overview of the funding calendar for the unit",
            "Advises on internal selection processes for limited calls",
        ],
    ))
    .with_level(LevelDescriptor::new(
        Advanced,
        &[
            "Analyses funder strategies and policy changes for institutional impact",
            "Coordinates institutional responses to large or strategic calls",
            "Develops relationships with funder programme managers",
        ],
    ))
    .with_level(
        LevelDescriptor::new(
            Exemplar,
            &[
                "Influences funder policy through consultation responses and advisory roles",
                "Leads institutional funding diversification strategy",
                "Is recognised externally as an expert on the funding landscape",
            ],
        )
        .with_alignment(0, "Sector-level influence", &[PSF]),
    )
}

fn proposal_development() -> Capability {
    Capability::new(
        PROPOSAL_DEVELOPMENT,
        "Proposal Development",
        "Supporting researchers to develop competitive, compliant funding proposals.",
    )
    .with_level(LevelDescriptor::new(
        Foundation,
        &[
            "Checks proposals against funder formatting and submission requirements",
            "Collates supporting documents and institutional approvals",
            "Submits applications through funder systems",
        ],
    ))
    .with_level(LevelDescriptor::new(
        Intermediate,
        &[
            "Provides structured feedback on draft case for support",
            "Coordinates internal peer review of proposals",
            "Manages proposal timelines with multiple contributors",
        ],
    ))
    .with_level(LevelDescriptor::new(
        Advanced,
        &[
            "Leads development of large, multi-partner proposals",
            "Advises on proposal strategy and positioning against funder priorities",
            "Designs proposal development support programmes",
            "Reviews unsuccessful applications to inform future bids",
        ],
    ))
    .with_level(LevelDescriptor::new(
        Exemplar,
        &[
            "Sets institutional standards for proposal quality",
            "Leads sector initiatives on proposal development practice",
            "Sits on funder review panels or advises funders on assessment",
        ],
    ))
}

fn costing_pricing() -> Capability {
    Capability::new(
        COSTING_PRICING,
        "Costing & Pricing",
        "Preparing accurate project costings and pricing in line with funder \
         rules and institutional policy.",
    )
    .with_level(
        LevelDescriptor::new(
            Foundation,
            &[
                "Prepares project costings using institutional costing tools",
                "Applies standard staff and overhead rates",
                "Identifies eligible and ineligible costs for common funders",
            ],
        )
        .with_alignment(0, "Full economic costing methodology", &["TRAC"]),
    )
    .with_level(LevelDescriptor::new(
        Intermediate,
        &[
            "Costs complex projects including equipment and facilities",
            "Explains funder contribution rates and their implications",
            "Advises on pricing for industry and commercial work",
        ],
    ))
    .with_level(LevelDescriptor::new(
        Advanced,
        &[
            "Negotiates pricing with external sponsors",
            "Approves costings on behalf of the institution",
            "Resolves costing issues for multi-institution bids",
        ],
    ))
    .with_level(LevelDescriptor::new(
        Exemplar,
        &[
            "Develops institutional costing and pricing policy",
            "Contributes to national costing guidance",
            "Leads review of cost recovery across the research portfolio",
        ],
    ))
}

fn initiation() -> Capability {
    Capability::new(
        INITIATION,
        "Initiation",
        "Reviewing, negotiating and setting up research agreements and awards \
         so projects can start on time.",
    )
    .with_level(LevelDescriptor::new(
        Foundation,
        &[
            "Records award details accurately in institutional systems",
            "Checks award letters against the submitted proposal",
            "Routes agreements to the correct approvers",
        ],
    ))
    .with_level(LevelDescriptor::new(
        Intermediate,
        &[
            "Reviews standard funder terms and highlights non-standard clauses",
            "Drafts standard research agreements from templates",
            "Sets up project accounts and budgets",
            "Coordinates project start-up with researchers and finance",
        ],
    ))
    .with_level(
        LevelDescriptor::new(
            Advanced,
            &[
                "Negotiates complex collaboration and contract research agreements",
                "Advises on intellectual property, liability and publication clauses",
                "Manages risk in agreements within delegated authority",
                "Resolves disputes over agreement terms with external parties",
            ],
        )
        .with_alignment(1, "Intellectual property management", &[ISO, PSF]),
    )
    .with_level(LevelDescriptor::new(
        Exemplar,
        &[
            "Develops institutional contracting policy and templates",
            "Leads negotiation of strategic partnership agreements",
            "Influences sector model agreements",
        ],
    ))
}

fn project_delivery() -> Capability {
    Capability::new(
        PROJECT_DELIVERY,
        "Project Delivery",
        "Supporting the delivery of research projects against plans, \
         milestones and funder requirements.",
    )
    .with_level(LevelDescriptor::new(
        Foundation,
        &[
            "Maintains project records and document repositories",
            "Schedules project meetings and records actions",
            "Tracks milestones and deliverables",
        ],
    ))
    .with_level(LevelDescriptor::new(
        Intermediate,
        &[
            "Manages project plans and flags slippage",
            "Coordinates partners on multi-site projects",
            "Processes variations such as extensions and staff changes",
        ],
    ))
    .with_level(
        LevelDescriptor::new(
            Advanced,
            &[
                "Manages large or programme-level research projects",
                "Leads project risk and issue management",
                "Reports to funders and steering committees on progress",
            ],
        )
        .with_alignment_statement("Consistent with programme management practice"),
    )
    .with_level(LevelDescriptor::new(
        Exemplar,
        &[
            "Establishes institutional project management frameworks",
            "Leads portfolio-level oversight of research delivery",
            "Shares delivery practice across the sector",
        ],
    ))
}

fn financial_management() -> Capability {
    Capability::new(
        FINANCIAL_MANAGEMENT,
        "Financial Management",
        "Managing research finances accurately and in line with funder and \
         institutional rules.",
    )
    .with_level(LevelDescriptor::new(
        Foundation,
        &[
            "Processes expenditure against project budgets",
            "Reconciles project accounts",
            "Responds to basic budget queries from researchers",
        ],
    ))
    .with_level(LevelDescriptor::new(
        Intermediate,
        &[
            "Prepares financial reports and claims for funders",
            "Forecasts spend and advises on budget reallocation",
            "Checks eligibility of expenditure before claims",
        ],
    ))
    .with_level(LevelDescriptor::new(
        Advanced,
        &[
            "Manages finances for complex multi-funder portfolios",
            "Prepares for and responds to funder audits",
            "Advises senior staff on financial risk in the research portfolio",
        ],
    ))
    .with_level(LevelDescriptor::new(
        Exemplar,
        &[
            "Sets policy for research financial management",
            "Leads institutional audit assurance for research funding",
            "Contributes to sector financial guidance",
        ],
    ))
}

fn research_integrity() -> Capability {
    Capability::new(
        RESEARCH_INTEGRITY,
        "Research Integrity & Compliance",
        "Ensuring research is conducted in line with ethical, legal and \
         regulatory requirements.",
    )
    .with_level(LevelDescriptor::new(
        Foundation,
        &[
            "Knows the institutional policies governing research conduct",
            "Checks that ethics approvals are in place before projects start",
            "Records compliance information accurately",
        ],
    ))
    .with_level(LevelDescriptor::new(
        Intermediate,
        &[
            "Advises researchers on data protection and export control",
            "Supports ethics committee processes",
            "Identifies compliance risks in proposals and agreements",
        ],
    ))
    .with_level(
        LevelDescriptor::new(
            Advanced,
            &[
                "Manages institutional compliance processes",
                "Investigates and resolves compliance concerns",
                "Delivers training on research integrity",
            ],
        )
        .with_alignment(2, "Research integrity training", &[RDF]),
    )
    .with_level(LevelDescriptor::new(
        Exemplar,
        &[
            "Leads institutional research integrity strategy",
            "Advises national bodies on research governance",
            "Develops sector-wide compliance guidance",
        ],
    ))
}

fn impact() -> Capability {
    Capability::new(
        IMPACT,
        "Impact & Knowledge Exchange",
        "Supporting the translation of research into economic, social and \
         policy impact.",
    )
    .with_level(LevelDescriptor::new(
        Foundation,
        &[
            "Records evidence of research impact",
            "Promotes knowledge exchange opportunities to researchers",
            "Supports the organisation of engagement events",
        ],
    ))
    .with_level(LevelDescriptor::new(
        Intermediate,
        &[
            "Helps researchers develop impact plans",
            "Builds relationships with external users of research",
            "Supports impact case study development",
        ],
    ))
    .with_level(LevelDescriptor::new(
        Advanced,
        &[
            "Leads knowledge exchange programmes",
            "Advises on impact strategy for major projects",
            "Evaluates the effectiveness of impact activity",
        ],
    ))
    .with_level(LevelDescriptor::new(
        Exemplar,
        &[
            "Shapes institutional impact strategy",
            "Influences national impact assessment practice",
            "Leads cross-sector knowledge exchange partnerships",
        ],
    ))
}

fn closure() -> Capability {
    Capability::new(
        CLOSURE,
        "Closure & Reporting",
        "Closing research projects and meeting final reporting, archiving and \
         financial obligations.",
    )
    .with_level(LevelDescriptor::new(
        Foundation,
        &[
            "Tracks project end dates and final report deadlines",
            "Archives project records according to retention policy",
            "Closes project accounts in institutional systems",
        ],
    ))
    .with_level(LevelDescriptor::new(
        Intermediate,
        &[
            "Prepares final financial statements",
            "Coordinates final technical reporting with researchers",
            "Resolves outstanding commitments before closure",
        ],
    ))
    .with_level(LevelDescriptor::new(
        Advanced,
        &[
            "Manages closure of complex or troubled projects",
            "Negotiates outcomes of under- or over-spend with funders",
            "Reviews closure processes to capture lessons learned",
        ],
    ))
    .with_level(LevelDescriptor::new(
        Exemplar,
        &[
            "Designs institutional closure and reporting processes",
            "Leads portfolio-level evaluation of completed research",
            "Shares closure practice across the sector",
        ],
    ))
}
