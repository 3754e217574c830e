//! Fixed extracted-text templates, one per category.
//!
//! There is no real text extraction: when a task completes, its
//! "extracted" content is the template for its category with the
//! display name interpolated. Categories without a template (General)
//! fall back to a generic document body.

use crate::category::Category;

/// Produce the simulated extracted text for a completed task.
pub fn generate_content(category: Category, name: &str) -> String {
    match category {
        Category::HrPolicies => format!(
            "Employee Handbook - {name}\n\n\
             Company Overview:\n\
             Our organization is committed to creating an inclusive and supportive work environment. \
             This handbook outlines our policies, procedures, and benefits.\n\n\
             Work Schedule:\n\
             Standard business hours are 9:00 AM to 5:00 PM, Monday through Friday. \
             Flexible scheduling is available with manager approval.\n\n\
             Time Off Policy:\n\
             Vacation is 20 days annually. Sick leave is 10 days annually. \
             Personal days are 3 days annually. There are 12 company holidays.\n\n\
             Benefits Package:\n\
             Health insurance covers medical, dental, and vision. \
             The 401(k) plan includes company matching. \
             A professional development budget and flexible work arrangements are available."
        ),
        Category::Finance => format!(
            "Financial Procedures - {name}\n\n\
             Expense Reporting:\n\
             All business expenses must be submitted within 30 days of incurrence using our Expensify platform.\n\n\
             Approval Limits:\n\
             Amounts under $100 require manager approval. \
             Amounts from $100 to $1000 require director approval. \
             Amounts over $1000 require VP approval.\n\n\
             Reimbursement Schedule:\n\
             Approved expenses are processed with the next bi-weekly payroll cycle.\n\n\
             Travel Policy:\n\
             Business travel must be pre-approved and booked through our corporate travel portal."
        ),
        Category::LegalCompliance => format!(
            "Legal Guidelines - {name}\n\n\
             Code of Conduct:\n\
             All employees must adhere to the highest ethical standards and comply with all applicable laws and regulations.\n\n\
             Confidentiality:\n\
             Employees must protect confidential company information and client data at all times.\n\n\
             Compliance Requirements:\n\
             Regular training on data protection, anti-harassment, and industry-specific regulations is mandatory."
        ),
        Category::Operations => format!(
            "Operations Manual - {name}\n\n\
             Daily Procedures:\n\
             Standard operating procedures for common business processes and workflows.\n\n\
             Quality Standards:\n\
             All work must meet established quality benchmarks and customer satisfaction metrics.\n\n\
             Emergency Procedures:\n\
             Detailed protocols for handling various emergency situations and business continuity."
        ),
        Category::ItTech => format!(
            "IT Support Manual - {name}\n\n\
             System Access:\n\
             All employees receive standard software packages including productivity suites, \
             communication tools, and security software.\n\n\
             Password Requirements:\n\
             Passwords need a minimum of 12 characters. \
             They must include uppercase, lowercase, numbers, and symbols. \
             They are changed every 90 days.\n\n\
             Support Channels:\n\
             The help desk is at ext. 4357. Email help@company.com. Emergencies go to ext. 911."
        ),
        Category::General => format!(
            "Document Content - {name}\n\n\
             This document contains important company information and procedures. \
             The content has been processed and indexed for search and retrieval \
             through the knowledge base system."
        ),
    }
}
