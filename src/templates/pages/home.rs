// templates/pages/home.rs

use maud::{html, Markup};

use crate::templates::page_layout;

const EXAMPLE_REQUEST: &str = r#"curl -s localhost:3000/analysis/lien-priority -d '{
  "interests": [
    { "id": "reg-2", "recordedDate": "2019-05-20", "kind": "mortgage",
      "holder": "KB Kookmin Bank", "amount": 360000000 },
    { "id": "reg-3", "recordedDate": "2023-11-05", "kind": "provisional-seizure",
      "holder": "Seoul Central District Court", "amount": 50000000 }
  ],
  "tenants": [
    { "id": "tenant-1", "moveInDate": "2019-03-10", "depositAmount": 120000000 }
  ]
}'"#;

pub fn home_page() -> Markup {
    page_layout(
        "Auction Analysis",
        html! {
            h1 { "Court-auction lien analysis" }
            p {
                "Post a property's registry entries and tenancies; get back the "
                "baseline extinguishing right, an extinguished/assumed verdict for "
                "every recorded right, and a cost projection for a candidate bid."
            }

            h2 { "Endpoints" }
            dl {
                dt { code { "POST /analysis/lien-priority" } }
                dd {
                    "Finds the baseline right, classifies each interest and tenant. "
                    "Kinds use the registry vocabulary: "
                    code { "ownership-transfer" } ", " code { "mortgage" } ", "
                    code { "lease-registration" } ", " code { "seizure" } ", "
                    code { "provisional-seizure" } ", " code { "auction-commencement" } "."
                }
                dt { code { "POST /analysis/cost-projection" } }
                dd {
                    "Projects total investment and return for a bid. The bid must sit "
                    "inside " code { "[minimumBidPrice, appraisalPrice]" }
                    "; anything else is rejected with a 422."
                }
                dt { code { "GET /analysis/sample" } }
                dd { "A worked example run through the same pipeline." }
            }

            h2 { "Conventions" }
            p {
                "Dates are " code { "YYYY-MM-DD" } ". Monetary values are integer won; "
                "only the projected ROI percentage is fractional."
            }

            h2 { "Try it" }
            pre { (EXAMPLE_REQUEST) }
        },
    )
}
