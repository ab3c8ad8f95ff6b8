// src/catalog/builtin.rs

//! Compiled-in faculty data.

use chrono::NaiveDate;

use crate::models::{
    Department, DownloadFile, FileType, GuideStep, NewsCategory, NewsItem, Priority, Program,
    Service, ServiceCategory,
};

fn department(id: &str, name: &str, codes: &[&str], description: &str) -> Department {
    Department {
        id: id.to_string(),
        name: name.to_string(),
        codes: codes.iter().map(|c| c.to_string()).collect(),
        description: description.to_string(),
        building_number: None,
        email: None,
        contact_number: None,
    }
}

pub fn departments() -> Vec<Department> {
    vec![
        department(
            "cs",
            "Computer Science",
            &["DPMCF0", "DPMC20", "ADMC20", "DPRSF0", "DPRS20", "ADRS20"],
            "Comprehensive computer science programs covering software development, algorithms, and theoretical foundations.",
        ),
        department(
            "cse",
            "Computer Systems Engineering",
            &["DPYEF0", "DPYE20", "ADYE20"],
            "Engineering-focused programs combining hardware and software systems design.",
        ),
        department(
            "informatics",
            "Informatics",
            &["DPIFF0", "DPIF20", "ADIF20"],
            "Information systems and data management programs for modern digital solutions.",
        ),
        department(
            "it",
            "Information Technology",
            &["DPITF0", "DPIT20", "ADIT21"],
            "Practical IT programs focusing on technology implementation and management.",
        ),
    ]
}

fn program(code: &str, description: &str, duration: &str) -> Program {
    Program {
        code: code.to_string(),
        description: description.to_string(),
        duration: duration.to_string(),
    }
}

pub fn programs() -> Vec<Program> {
    const FOUNDATION: &str = "4 Years (Foundation)";
    const MAINSTREAM: &str = "3 Years";
    const ADVANCED: &str = "2 Years";

    vec![
        program("DPMCF0", "Diploma in Computer Science - Foundation", FOUNDATION),
        program("DPMC20", "Diploma in Computer Science - MainStream", MAINSTREAM),
        program("ADMC20", "Advanced Diploma in Computer Science", ADVANCED),
        program("DPRSF0", "Diploma in Computer Science (Research) - Foundation", FOUNDATION),
        program("DPRS20", "Diploma in Computer Science (Research) - MainStream", MAINSTREAM),
        program("ADRS20", "Advanced Diploma in Computer Science (Research)", ADVANCED),
        program("DPYEF0", "Diploma in Computer Systems Engineering - Foundation", FOUNDATION),
        program("DPYE20", "Diploma in Computer Systems Engineering - MainStream", MAINSTREAM),
        program("ADYE20", "Advanced Diploma in Computer Systems Engineering", ADVANCED),
        program("DPIFF0", "Diploma in Informatics - Foundation", FOUNDATION),
        program("DPIF20", "Diploma in Informatics - MainStream", MAINSTREAM),
        program("ADIF20", "Advanced Diploma in Informatics", ADVANCED),
        program("DPITF0", "Diploma in Information Technology - Foundation", FOUNDATION),
        program("DPIT20", "Diploma in Information Technology - MainStream", MAINSTREAM),
        program("ADIT21", "Advanced Diploma in Information Technology", ADVANCED),
    ]
}

fn service(
    id: &str,
    title: &str,
    category: ServiceCategory,
    description: &str,
    details: &str,
    steps: &[&str],
) -> Service {
    Service {
        id: id.to_string(),
        title: title.to_string(),
        category,
        description: description.to_string(),
        details: details.to_string(),
        status_link: None,
        steps: steps.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn services() -> Vec<Service> {
    use ServiceCategory::{AllStudents, NewcomerStudents, SeniorStudents};

    vec![
        service(
            "mark-enquiries",
            "Mark Enquiries/Predicate Enquiries",
            SeniorStudents,
            "Get assistance with mark-related queries and academic predicates.",
            "Contact your Academic Department for mark enquiries and predicate-related questions.",
            &["Contact your Academic Department directly for all marks and predicate enquiries"],
        ),
        service(
            "academic-exclusions",
            "Academic Exclusions",
            SeniorStudents,
            "Information and appeals process for academic exclusions.",
            "Refer to the ITS notification. Apply for an appeal against exclusion via EC (Electronic Campus). \
             You will receive the outcome of your appeal via SASO (Student Academic Support Office) electronically. \
             You need to sign the receipt (letter) of the outcome of your appeal online via SASO. \
             If your academic block was lifted, read the conditions and register accordingly and in cooperation with your Academic Department. \
             If your academic block was not lifted, you will remain excluded for 1 year from the Faculty of ICT, not from other faculties in TUT.",
            &[
                "Refer to the ITS notification",
                "Apply for an appeal against exclusion via EC (Electronic Campus)",
                "Receive outcome via SASO electronically",
                "Sign the receipt letter online via SASO",
                "Follow conditions if block is lifted, or wait 1 year if not lifted",
            ],
        ),
        service(
            "financial-exclusion",
            "Financial Exclusion",
            SeniorStudents,
            "Assistance with financial exclusion matters.",
            "Refer to the ITS notification. Visit Mr Rodney Lebelo at Student Accounts next to the cashiers (building 12, ground floor).",
            &[
                "Refer to ITS notification",
                "Visit Mr Lebelo at Student Accounts",
            ],
        ),
        service(
            "nsfas-enquiries",
            "NSFAS Enquiries",
            SeniorStudents,
            "National Student Financial Aid Scheme support and information.",
            "For enquiries, visit the Financial Aid Office. Find your propensity letter form from the Financial Aid Office. \
             Take your propensity letter form to your Academic Department and then to OneStop to obtain signatures. \
             Other NSFAS issues can be resolved by visiting their website.",
            &[
                "Visit the Financial Aid Office for enquiries",
                "Find your propensity letter form from Financial Aid Office",
                "Take form to your Academic Department",
                "Get signatures from OneStop",
                "Visit NSFAS website for other issues",
            ],
        ),
        service(
            "change-of-course",
            "Change of Course",
            SeniorStudents,
            "Process for changing your academic course (not admission related).",
            "Were you registered the previous academic year? If yes, apply for change of course via EC (Electronic Campus). \
             You can only apply once a year during the October/November period due to the faculty having one intake per year. \
             After you receive an approval email, you have to first cancel your current course before the new course can be opened on the system. \
             Thereafter, you can register for the new course. You must visit your Academic Department to determine for which modules \
             you will be credited and for which modules you need to register for.",
            &[
                "Confirm you were registered the previous academic year",
                "Apply via EC (Electronic Campus) during October/November",
                "Wait for approval email",
                "Cancel your current course first",
                "Register for the new course",
                "Visit Academic Department for module credits",
            ],
        ),
        service(
            "admissions",
            "Admissions",
            NewcomerStudents,
            "Information about application processes and deadlines.",
            "Visit the TUT website to check application closing dates (www.tut.ac.za). \
             Do not visit any office and ask staff to screen your grade 12 certificate. You must apply on-line. \
             You will have to visit www.tut.ac.za daily to see which courses are available if you did not apply earlier or if you want to apply late.",
            &["Visit www.tut.ac.za to check application closing dates"],
        ),
        service(
            "bursaries",
            "Bursaries",
            AllStudents,
            "Financial assistance and bursary information.",
            "Visit the FUNDI office in building 12 on the ground floor.",
            &[],
        ),
        service(
            "timetables",
            "Class & Test Timetables",
            AllStudents,
            "Access your class and test schedules.",
            "Visit your Academic Department to obtain your timetables. \
             If you experience clashes on the timetables, visit your Academic Department urgently.",
            &[
                "Visit Academic Department for timetables",
                "Report clashes to Academic Department urgently",
            ],
        ),
        service(
            "Subject additions and cancellations",
            "Subject Additions and Cancellations",
            SeniorStudents,
            "Adding or cancelling subjects after registration.",
            "Obtain the form from OneStop and have it approved by your Academic Department.",
            &[
                "Obtain the form from OneStop.",
                "Obtain approval from your Academic Department.",
            ],
        ),
        service(
            "NO WALK-INS Policy",
            "NO WALK-INS Policy",
            NewcomerStudents,
            "Applications are online only; offices do not screen walk-ins.",
            "NO HUMANITIES ENQUIRIES at ICT Faculty offices. Do not ask staff to screen your grade 12 certificate. \
             You must apply online and check www.tut.ac.za daily for available courses.",
            &[
                "NO HUMANITIES ENQUIRIES at ICT Faculty offices",
                "Do not ask staff to screen grade 12 certificate",
                "Must apply online only",
                "Check www.tut.ac.za daily for available courses",
            ],
        ),
        service(
            "Intercampus Transfers",
            "Intercampus Transfers",
            SeniorStudents,
            "Moving your registration to another campus.",
            "Registered Computer Science students apply via EC between late October and mid-November. The outcome is sent via email.",
            &[
                "Must be registered Computer Science Student",
                "Apply via EC (electronic Campus)",
                "Available end of October to mid-November only",
                "One intake per year only",
            ],
        ),
        service(
            "Re-admission",
            "Re-admission",
            SeniorStudents,
            "Returning after a break in studies or an exclusion.",
            "Get the re-admission form from OneStop building 7 and obtain approval from your Academic Department.",
            &[
                "Had a break in studies? Get form from OneStop",
                "Returning after exclusion? Get form from OneStop",
                "Get approval from Academic Department",
            ],
        ),
        service(
            "Special & Exit Examinations",
            "Special & Exit Examinations",
            SeniorStudents,
            "Special and exit examination enquiries.",
            "Visit the Examination Administration office for all special and exit examination enquiries.",
            &["Visit Examination Administration Office for all enquiries"],
        ),
        service(
            "Probation",
            "Probation",
            SeniorStudents,
            "Students placed on academic probation.",
            "Refer to the ITS notification and sign the probation form via SASO electronically.",
            &[
                "Refer to ITS notification",
                "Sign probation form via SASO electronically",
            ],
        ),
        service(
            "Other Admission Enquiries",
            "Other Admission Enquiries",
            NewcomerStudents,
            "Application status, document uploads and campus changes.",
            "For application status, document uploads or an admission campus transfer, email admission@tut.ac.za, \
             phone 0861102421, or visit OneStop or the Admissions Lab in building 10.",
            &[
                "Application status enquiries",
                "Documentation upload assistance",
                "Campus change (Admission Transfer)",
                "Contact via email: admission@tut.ac.za",
                "Phone: 0861102421",
                "Visit OneStop or Admissions Lab in Building 10",
            ],
        ),
        service(
            "Residence Administration",
            "Residence Administration",
            AllStudents,
            "Student residence placement and administration.",
            "Contact Solly Sekgalabje on 012 382 9500 or sekgalabjesb@tut.ac.za.",
            &[
                "Contact Solly Sekgalabje",
                "Phone: 012 382 9500",
                "Email: sekgalabjesb@tut.ac.za",
            ],
        ),
        service(
            "Recognition / Exemption (CAT)",
            "Recognition / Exemption (CAT)",
            SeniorStudents,
            "Credit accumulation and transfer for previously passed modules.",
            "Get the CAT form from OneStop building 7. Approval is needed from your Academic Department.",
            &[
                "Obtain form from OneStop",
                "Get approvals from Academic Department",
            ],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn news_item(
    id: &str,
    title: &str,
    summary: &str,
    content: &str,
    (year, month, day): (i32, u32, u32),
    category: NewsCategory,
    priority: Priority,
    is_urgent: bool,
    download: Option<DownloadFile>,
) -> NewsItem {
    NewsItem {
        id: id.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        content: content.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        category,
        priority,
        is_urgent,
        download,
    }
}

fn attachment(filename: &str, file_type: FileType, size: &str) -> Option<DownloadFile> {
    Some(DownloadFile {
        filename: filename.to_string(),
        url: format!("/downloads/{filename}"),
        file_type,
        size: Some(size.to_string()),
    })
}

pub fn news() -> Vec<NewsItem> {
    use NewsCategory::{Announcement, Event, Registration, Wil};

    vec![
        news_item(
            "1",
            "Huawei ICT Competition",
            "Huawei is calling on ICT students to participate in their 2025-2026 ICT Competition. Kindly download the attachment for details.",
            "Huawei is calling on ICT students to participate in their 2025-2026 ICT Competition. \
             This is a great opportunity for students to showcase their technical skills and compete globally. \
             Please download the attachment for complete details and registration information.",
            (2025, 8, 5),
            Event,
            Priority::High,
            false,
            attachment("Huawei_ICT_Competition.pdf", FileType::Pdf, "2.1 MB"),
        ),
        news_item(
            "2",
            "IBM Z Datathon",
            "IBM Z Datathon is a 24-hour global student technology event. Registration and over 5000 participants. Theme: Tech For Good Total Prize: $30,000",
            "IBM Z Datathon 2025 Date: October 11, 2025 Theme: Tech For Good Total Prize: $30,000. \
             Registration Link: https://www.starrhacks.org/ibm-z-datathon-2025. \
             Please also see the event flyer and additional information in the attached document.",
            (2025, 8, 1),
            Event,
            Priority::High,
            false,
            attachment("IBM_Z_Datathon.pdf", FileType::Pdf, "1.8 MB"),
        ),
        news_item(
            "3",
            "WIL opportunity with Sithembilungelo Projects and Services",
            "Sithembilungelo Projects and Services is offering WIL opportunity to ICT students. Kindly download the attachment for further details.",
            "Sithembilungelo Projects and Services is offering Work Integrated Learning (WIL) opportunities specifically for ICT students. \
             This is an excellent chance to gain practical experience in the industry. \
             Please download the attachment for application requirements and further details.",
            (2025, 8, 1),
            Wil,
            Priority::Medium,
            false,
            attachment("Sithembilungelo.jpg", FileType::Jpg, "850 KB"),
        ),
        news_item(
            "4",
            "WIL opportunity with Moepi Publishing",
            "Moepi Publishing is offering WIL opportunity to Multimedia students. Kindly download the attachment for further details.",
            "Moepi Publishing is offering Work Integrated Learning (WIL) opportunities to Multimedia students. \
             This opportunity provides hands-on experience in the publishing and multimedia industry. \
             Please download the attachment for application procedures and requirements.",
            (2025, 7, 30),
            Wil,
            Priority::Medium,
            false,
            attachment("job_recruitment_multimedia.png", FileType::Png, "1.2 MB"),
        ),
        news_item(
            "5",
            "Email Verification Reminder",
            "For those that have not yet verified your Email with EC, please do so when you get a chance.",
            "Important reminder: Students who have not yet verified their email addresses with the Electronic Campus (EC) system \
             are urged to do so as soon as possible. Email verification is essential for receiving important academic communications and updates.",
            (2025, 7, 30),
            Announcement,
            Priority::Medium,
            true,
            None,
        ),
        news_item(
            "6",
            "WIL opportunity with Spiral8Studio",
            "Spiral8Studio is offering WIL opportunity to Multimedia and Computer Science students. Kindly download the attachment for further details.",
            "Spiral8Studio is offering Work Integrated Learning (WIL) opportunities to both Multimedia and Computer Science students. \
             This is a great opportunity to gain industry experience in a dynamic studio environment. \
             Please download the attachment for complete details and application process.",
            (2025, 7, 27),
            Wil,
            Priority::Medium,
            false,
            attachment("New-Gen_WIL_Programme.pdf", FileType::Pdf, "1.5 MB"),
        ),
        news_item(
            "7",
            "WIL registration forms: Sosh students (Computer Science and Multimedia)",
            "Kindly find attached the registration forms for WIL.",
            "Work Integrated Learning (WIL) registration forms are now available for Soshanguve campus students studying Computer Science and Multimedia. \
             Students must complete these forms to participate in WIL programs. \
             Please find the attached registration forms and submit them according to the specified deadlines.",
            (2025, 7, 24),
            Registration,
            Priority::High,
            false,
            attachment("WIL_registration_forms.pdf", FileType::Pdf, "980 KB"),
        ),
        news_item(
            "8",
            "Class group based on ITS group codes",
            "Class group based on ITS group codes is now an option for those who would like to give it a test run.",
            "A new feature has been implemented allowing class grouping based on ITS (Information Technology Services) group codes. \
             This is currently available as a test option for students who would like to try this new organizational system for their classes.",
            (2025, 7, 24),
            Announcement,
            Priority::Low,
            false,
            None,
        ),
    ]
}

fn step(number: u32, title: &str, description: &str, content: &[&str]) -> GuideStep {
    GuideStep {
        number,
        title: title.to_string(),
        description: description.to_string(),
        content: content.iter().map(|c| c.to_string()).collect(),
    }
}

pub fn guide() -> Vec<GuideStep> {
    vec![
        step(
            1,
            "Land on Homepage",
            "Start your journey from the homepage",
            &[
                "Welcome to the ICT Faculty Information Application",
                "This is your starting point to explore the system",
            ],
        ),
        step(
            2,
            "Select Your Level of Study",
            "Use the navigation bar to filter services",
            &[
                "Select your level of study: Senior Students, Newcomer Students, or All Students",
                "This will filter the services relevant to you",
            ],
        ),
        step(
            3,
            "Search for a Topic or Service",
            "Use the search bar to find what you need",
            &[
                "Type a department or service name into the search bar",
                "Search results appear below the bar as interactive cards",
            ],
        ),
        step(
            4,
            "Select a Topic or Card",
            "Click a result card to view more information",
            &[
                "After searching, click on the card that best matches your topic",
                "You will be directed to a detailed view with more information",
            ],
        ),
        step(
            5,
            "Explore Quick Links for Help",
            "Use quick links and additional resources",
            &[
                "Check quick links for external websites and further resources",
                "These links provide direct access to forms, registration, and more",
            ],
        ),
        step(
            6,
            "Contact Us",
            "Get in touch with support for more help",
            &[
                "Use the contact details listed for email or phone support",
                "The support team is available during working hours to assist you",
            ],
        ),
    ]
}
