// src/chat/faq.rs

//! Canned answers for the chat assistant.
//!
//! Each topic is answered from a small static table. Multi-line answers are
//! joined with newlines.

use crate::models::Topic;
use crate::utils::join_lines;

/// Static FAQ tables backing the keyword responder.
#[derive(Debug, Clone)]
pub struct FaqBook {
    /// Department name and its program codes, in display order
    pub departments: Vec<(String, Vec<String>)>,
    pub academic_exclusion: Vec<String>,
    pub financial_exclusion: Vec<String>,
    pub nsfas: Vec<String>,
    pub course_change: Vec<String>,
    pub special_exam: String,
    pub probation: Vec<String>,
    pub timetable: String,
    pub readmission: Vec<String>,
    pub intercampus_transfer: Vec<String>,
    pub admission: Vec<String>,
    pub newcomer: Vec<String>,
    pub bursary: String,
    pub residence: String,
    pub cat: String,
}

impl FaqBook {
    /// Render the answer for a topic.
    pub fn answer(&self, topic: Topic) -> String {
        match topic {
            Topic::Departments => self.departments_answer(),
            Topic::AcademicExclusion => join_lines(&self.academic_exclusion),
            Topic::FinancialExclusion => join_lines(&self.financial_exclusion),
            Topic::Nsfas => join_lines(&self.nsfas),
            Topic::CourseChange => join_lines(&self.course_change),
            Topic::SpecialExam => self.special_exam.clone(),
            Topic::Probation => join_lines(&self.probation),
            Topic::Timetable => self.timetable.clone(),
            Topic::Readmission => join_lines(&self.readmission),
            Topic::IntercampusTransfer => join_lines(&self.intercampus_transfer),
            Topic::Admission => join_lines(&self.admission),
            Topic::Newcomer => join_lines(&self.newcomer),
            Topic::Bursary => self.bursary.clone(),
            Topic::Residence => self.residence.clone(),
            Topic::Cat => self.cat.clone(),
        }
    }

    /// One "Name: CODE, CODE" line per department.
    fn departments_answer(&self) -> String {
        let lines: Vec<String> = self
            .departments
            .iter()
            .map(|(name, codes)| format!("{}: {}", name, codes.join(", ")))
            .collect();
        join_lines(&lines)
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for FaqBook {
    fn default() -> Self {
        Self {
            departments: vec![
                (
                    "Computer Science".to_string(),
                    lines(&["DPMCF0", "DPMC20", "ADMC20", "DPRSF0", "DPRS20", "ADRS20"]),
                ),
                (
                    "Computer Systems Engineering".to_string(),
                    lines(&["DPYEF0", "DPYE20", "ADYE20"]),
                ),
                (
                    "Informatics".to_string(),
                    lines(&["DPIFF0", "DPIF20", "ADIF20"]),
                ),
                (
                    "Information Technology".to_string(),
                    lines(&["DPITF0", "DPIT20", "ADIT21"]),
                ),
            ],
            academic_exclusion: lines(&[
                "Refer to the ITS notification.",
                "Apply for an appeal against exclusion via EC (Electronic Campus).",
                "You will receive the outcome via SASO electronically.",
                "Sign the outcome letter via SASO online.",
                "If block was lifted: read conditions and register in cooperation with your Academic Department.",
                "If not lifted: You are excluded for 1 year from ICT Faculty.",
                "No reconsideration at Academic Department or SASO after rejection.",
            ]),
            financial_exclusion: lines(&[
                "Refer to the ITS notification.",
                "Visit Mr Rodney Lebelo at Student Accounts (building 12, ground floor).",
            ]),
            nsfas: lines(&[
                "Visit the Financial Aid Office.",
                "Get a propensity letter form and have it signed by your Academic Department and OneStop.",
                "For other issues, visit the NSFAS website.",
            ]),
            course_change: lines(&[
                "Must have been registered the previous academic year.",
                "Apply via EC during October/November only.",
                "After approval, cancel current course before registering new one.",
                "Visit Academic Department for credit evaluations.",
            ]),
            special_exam: "Visit the Examination Administration office.".to_string(),
            probation: lines(&[
                "Refer to the ITS notification.",
                "Sign probation form via SASO electronically.",
            ]),
            timetable: "Visit your Academic Department. If there are clashes, visit urgently."
                .to_string(),
            readmission: lines(&[
                "Break in studies: Get form from OneStop building 7, get Academic Department approval.",
                "Returning after exclusion: Same process via OneStop building 7 + Academic Department.",
            ]),
            intercampus_transfer: lines(&[
                "Registered Computer Science student: Apply via EC during late Oct to mid-Nov.",
                "Outcome sent via email.",
            ]),
            admission: lines(&[
                "Visit www.tut.ac.za for application closing dates.",
                "After applying: check status, upload documents, request campus transfer via:",
                "Email: admission@tut.ac.za",
                "Phone: 0861102421",
                "Visit OneStop building 7 or Admissions Lab in building 10",
            ]),
            newcomer: lines(&[
                "NO humanities queries at ICT offices.",
                "NO walk-ins to screen grade 12. Apply online.",
                "Visit www.tut.ac.za daily for late applications.",
            ]),
            bursary: "Visit FUNDI office, building 12, ground floor.".to_string(),
            residence: "Contact Solly Sekgalabje (012 382 9500) or sekgalabjesb@tut.ac.za"
                .to_string(),
            cat: "Get CAT form from OneStop building 7. Approval needed from your Academic Department."
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_departments_answer() {
        let answer = FaqBook::default().answer(Topic::Departments);
        let lines: Vec<&str> = answer.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "Computer Systems Engineering: DPYEF0, DPYE20, ADYE20");
    }

    #[test]
    fn test_list_answers_are_newline_joined() {
        let answer = FaqBook::default().answer(Topic::FinancialExclusion);
        assert_eq!(
            answer,
            "Refer to the ITS notification.\n\
             Visit Mr Rodney Lebelo at Student Accounts (building 12, ground floor)."
        );
    }

    #[test]
    fn test_single_line_answer() {
        let answer = FaqBook::default().answer(Topic::Bursary);
        assert_eq!(answer, "Visit FUNDI office, building 12, ground floor.");
    }
}
