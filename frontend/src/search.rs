use serde::{Deserialize, Serialize};

use crate::data;
use crate::models::Doctor;

/// Query string of the `/doctors` route.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorSearchQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
}

impl DoctorSearchQuery {
    pub fn for_specialty(key: &str) -> Self {
        Self {
            specialty: Some(key.to_string()),
            ..Self::default()
        }
    }

    /// Form encoding (`+` for spaces), the same shape the router writes for
    /// `push_with_query` and `Link` queries.
    pub fn to_query_string(&self) -> String {
        let mut out = url::form_urlencoded::Serializer::new(String::new());
        out.append_pair("q", &self.q);
        if let Some(city) = &self.city {
            out.append_pair("city", city);
        }
        if let Some(specialty) = &self.specialty {
            out.append_pair("specialty", specialty);
        }
        out.finish()
    }

    pub fn matches(&self, doctor: &Doctor) -> bool {
        let needle = self.q.trim().to_lowercase();
        let text_ok = needle.is_empty()
            || doctor.name.to_lowercase().contains(&needle)
            || doctor.specialization.to_lowercase().contains(&needle);
        let city_ok = self
            .city
            .as_deref()
            .map_or(true, |city| doctor.city.eq_ignore_ascii_case(city));
        let specialty_ok = self.specialty.as_deref().map_or(true, |key| {
            data::specialty_label(key)
                .unwrap_or(key)
                .eq_ignore_ascii_case(doctor.specialization)
        });
        text_ok && city_ok && specialty_ok
    }
}

/// What the hero does once a search passes validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchPlan {
    pub query: DoctorSearchQuery,
    pub notice: String,
}

/// Validates the hero form. Blank text yields no plan, so nothing is
/// announced and nothing navigates.
pub fn plan_search(text: &str, city: Option<&str>, specialty: Option<&str>) -> Option<SearchPlan> {
    let q = text.trim();
    if q.is_empty() {
        return None;
    }
    let city = city.map(str::trim).filter(|c| !c.is_empty()).map(str::to_string);
    let specialty = specialty.filter(|s| !s.is_empty()).map(str::to_string);
    let notice = match &city {
        Some(city) => format!("Searching for \"{}\" in {}...", q, city),
        None => format!("Searching for \"{}\"...", q),
    };
    Some(SearchPlan {
        query: DoctorSearchQuery {
            q: q.to_string(),
            city,
            specialty,
        },
        notice,
    })
}

pub fn filter_doctors<'a>(doctors: &'a [Doctor], query: &DoctorSearchQuery) -> Vec<&'a Doctor> {
    doctors.iter().filter(|doctor| query.matches(doctor)).collect()
}

/// Submit/settle bookkeeping for the hero search. At most one search is in
/// flight; the follow-up navigation only happens while the form is mounted.
#[derive(Debug, Default)]
pub struct SearchSession {
    in_flight: bool,
}

impl SearchSession {
    pub fn is_searching(&self) -> bool {
        self.in_flight
    }

    /// Starts a search, announcing it through `notify`. Returns the query to
    /// navigate to once the delay has passed.
    pub fn submit(
        &mut self,
        text: &str,
        city: Option<&str>,
        specialty: Option<&str>,
        notify: impl FnOnce(String),
    ) -> Option<DoctorSearchQuery> {
        if self.in_flight {
            return None;
        }
        let plan = plan_search(text, city, specialty)?;
        self.in_flight = true;
        notify(plan.notice);
        Some(plan.query)
    }

    pub fn settle(&mut self, query: DoctorSearchQuery, still_mounted: bool, navigate: impl FnOnce(DoctorSearchQuery)) {
        self.in_flight = false;
        if still_mounted {
            navigate(query);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DOCTORS;

    #[test]
    fn blank_search_has_no_plan() {
        assert_eq!(plan_search("", Some("Mumbai"), None), None);
        assert_eq!(plan_search("   \t", None, None), None);
    }

    #[test]
    fn search_plan_encodes_query_and_city() {
        let plan = plan_search("  heart & lungs ", Some("New Delhi"), None).unwrap();
        assert_eq!(plan.query.q, "heart & lungs");
        assert_eq!(plan.notice, "Searching for \"heart & lungs\" in New Delhi...");
        assert_eq!(plan.query.to_query_string(), "q=heart+%26+lungs&city=New+Delhi");
    }

    #[test]
    fn empty_city_and_specialty_are_dropped() {
        let plan = plan_search("rao", Some(""), Some("")).unwrap();
        assert_eq!(plan.query.city, None);
        assert_eq!(plan.query.specialty, None);
        assert_eq!(plan.query.to_query_string(), "q=rao");
    }

    #[test]
    fn specialty_query_string() {
        let query = DoctorSearchQuery::for_specialty("cardiology");
        assert_eq!(query.to_query_string(), "q=&specialty=cardiology");
    }

    #[test]
    fn query_string_decodes_back_to_the_same_filters() {
        let query = plan_search("heart & lungs", Some("New Delhi"), Some("cardiology")).unwrap().query;
        let pairs: Vec<(String, String)> = url::form_urlencoded::parse(query.to_query_string().as_bytes())
            .into_owned()
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "heart & lungs".to_string()),
                ("city".to_string(), "New Delhi".to_string()),
                ("specialty".to_string(), "cardiology".to_string()),
            ]
        );
    }

    #[derive(Default)]
    struct Recorded {
        notices: Vec<String>,
        navigations: Vec<String>,
    }

    fn submit(session: &mut SearchSession, rec: &mut Recorded, text: &str, city: Option<&str>) -> Option<DoctorSearchQuery> {
        session.submit(text, city, None, |notice| rec.notices.push(notice))
    }

    #[test]
    fn blank_submit_neither_notifies_nor_navigates() {
        let mut session = SearchSession::default();
        let mut rec = Recorded::default();
        assert_eq!(submit(&mut session, &mut rec, "   ", Some("Pune")), None);
        assert!(!session.is_searching());
        assert!(rec.notices.is_empty());
        assert!(rec.navigations.is_empty());
    }

    #[test]
    fn submit_notifies_once_then_navigates_once() {
        let mut session = SearchSession::default();
        let mut rec = Recorded::default();
        let query = submit(&mut session, &mut rec, "heart & lungs", Some("New Delhi")).unwrap();
        assert!(session.is_searching());
        assert_eq!(rec.notices, vec!["Searching for \"heart & lungs\" in New Delhi...".to_string()]);
        assert!(rec.navigations.is_empty());

        session.settle(query, true, |q| rec.navigations.push(q.to_query_string()));
        assert!(!session.is_searching());
        assert_eq!(rec.notices.len(), 1);
        assert_eq!(rec.navigations, vec!["q=heart+%26+lungs&city=New+Delhi".to_string()]);
    }

    #[test]
    fn second_submit_while_searching_is_ignored() {
        let mut session = SearchSession::default();
        let mut rec = Recorded::default();
        let first = submit(&mut session, &mut rec, "rao", None).unwrap();
        assert_eq!(submit(&mut session, &mut rec, "mehta", None), None);
        assert_eq!(rec.notices.len(), 1);

        session.settle(first, true, |q| rec.navigations.push(q.to_query_string()));
        assert_eq!(rec.navigations, vec!["q=rao".to_string()]);
        assert!(submit(&mut session, &mut rec, "mehta", None).is_some());
    }

    #[test]
    fn settle_after_unmount_skips_navigation() {
        let mut session = SearchSession::default();
        let mut rec = Recorded::default();
        let query = submit(&mut session, &mut rec, "rao", None).unwrap();
        session.settle(query, false, |q| rec.navigations.push(q.to_query_string()));
        assert!(rec.navigations.is_empty());
        assert!(!session.is_searching());
    }

    #[test]
    fn filters_by_text_city_and_specialty() {
        let by_text = DoctorSearchQuery { q: "derma".into(), ..Default::default() };
        let ids: Vec<u32> = filter_doctors(DOCTORS, &by_text).iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![3, 8]);

        let by_city = DoctorSearchQuery {
            q: "derma".into(),
            city: Some("mumbai".into()),
            ..Default::default()
        };
        let ids: Vec<u32> = filter_doctors(DOCTORS, &by_city).iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![8]);

        let by_specialty = DoctorSearchQuery::for_specialty("cardiology");
        let ids: Vec<u32> = filter_doctors(DOCTORS, &by_specialty).iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 7]);
    }

    #[test]
    fn empty_query_matches_everyone() {
        assert_eq!(filter_doctors(DOCTORS, &DoctorSearchQuery::default()).len(), DOCTORS.len());
    }
}
