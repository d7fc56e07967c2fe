//! Built-in question graph and reference tables.

use indexmap::IndexMap;

use super::{
    Catalog, Condition, InsightRule, QuestionCategory, QuestionNode, QuizOption, ScenarioRule,
    TraitDefinition,
};

const LIFE_STAGE: &str = "student_lifecycle";

pub(super) fn catalog() -> Catalog {
    let questions = questions();
    let index = Catalog::index_questions(&questions);
    Catalog {
        questions,
        traits: traits(),
        career_fields: career_fields(),
        scenarios: scenarios(),
        insights: insights(),
        life_stage_question: LIFE_STAGE.to_string(),
        backfill_fields: ["technology", "healthcare", "business", "education", "arts"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        index,
    }
}

fn opt(text: &str, value: &str) -> QuizOption {
    QuizOption::new(text, value)
}

fn questions() -> Vec<QuestionNode> {
    vec![
        QuestionNode::new(LIFE_STAGE, "Where are you in your journey right now?", QuestionCategory::Identity)
            .help("We tailor the next questions to your stage")
            .option(opt("I'm in high school", "high_school").then("hs_college_direction"))
            .option(opt("I'm in college", "college").then("college_major_status"))
            .option(opt("I recently graduated", "recent_grad").then("grad_focus"))
            .option(opt("I'm looking to change careers", "career_changer").then("changer_motivation"))
            .option(opt("I'm working and want to grow", "professional").then("pro_growth_goal")),
        // High school branch
        QuestionNode::new("hs_college_direction", "What are you looking for after high school?", QuestionCategory::Direction)
            .requires(LIFE_STAGE)
            .when(Condition::answer_is(LIFE_STAGE, "high_school"))
            .option(opt("Going deep into a subject at university", "academic_depth").with_trait("intellectual_curiosity", 1.5).then("hs_subject_interest"))
            .option(opt("Learning a hands-on skill", "hands_on").with_trait("practical_builder", 1.5).then("hs_subject_interest"))
            .option(opt("Getting into the workforce quickly", "career_fast_track").with_trait("entrepreneurial", 1.0).then("hs_subject_interest"))
            .option(opt("I haven't decided yet", "undecided").with_trait("adaptable", 1.0).then("hs_subject_interest")),
        QuestionNode::new("hs_subject_interest", "Which subjects do you enjoy most?", QuestionCategory::Interests)
            .requires("hs_college_direction")
            .option(opt("Math, science, or computers", "stem").with_trait("analytical_mind", 2.0).then("core_interests"))
            .option(opt("Art, music, or writing", "arts").with_trait("creative_expression", 2.0).then("core_interests"))
            .option(opt("History, psychology, or social studies", "social").with_trait("people_helper", 2.0).then("core_interests"))
            .option(opt("Economics or business classes", "business").with_trait("leadership", 2.0).then("core_interests"))
            .option(opt("Biology or health classes", "health").with_trait("detail_oriented", 1.5).then("core_interests")),
        // College branch
        QuestionNode::new("college_major_status", "Where do you stand with your major?", QuestionCategory::Direction)
            .requires(LIFE_STAGE)
            .when(Condition::answer_is(LIFE_STAGE, "college"))
            .option(opt("Declared and confident", "declared").with_trait("detail_oriented", 1.0).then("college_field"))
            .option(opt("Still exploring options", "exploring").with_trait("intellectual_curiosity", 1.0).then("college_field"))
            .option(opt("Thinking about switching", "switching").with_trait("adaptable", 1.5).then("college_field")),
        QuestionNode::new("college_field", "Which field is closest to your studies?", QuestionCategory::Interests)
            .requires("college_major_status")
            .option(opt("Science, technology, engineering, or math", "stem").with_trait("analytical_mind", 2.0).then("core_interests"))
            .option(opt("Arts and humanities", "arts").with_trait("creative_expression", 2.0).then("core_interests"))
            .option(opt("Health sciences", "health").with_trait("people_helper", 2.0).then("core_interests"))
            .option(opt("Business", "business").with_trait("leadership", 2.0).then("core_interests"))
            .option(opt("Social sciences", "social_science").with_trait("intellectual_curiosity", 1.5).then("core_interests")),
        // Recent graduate branch
        QuestionNode::new("grad_focus", "What's your main focus right now?", QuestionCategory::Direction)
            .requires(LIFE_STAGE)
            .when(Condition::answer_is(LIFE_STAGE, "recent_grad"))
            .option(opt("Landing my first job", "job_search").with_trait("practical_builder", 1.0).then("core_interests"))
            .option(opt("Applying to graduate school", "grad_school").with_trait("intellectual_curiosity", 2.0).then("core_interests"))
            .option(opt("Taking time to figure things out", "gap_year").with_trait("adaptable", 1.5).then("core_interests"))
            .option(opt("Starting something of my own", "start_something").with_trait("entrepreneurial", 2.0).then("core_interests")),
        // Career changer branch
        QuestionNode::new("changer_motivation", "What's driving your career change?", QuestionCategory::Direction)
            .requires(LIFE_STAGE)
            .when(Condition::answer_is(LIFE_STAGE, "career_changer"))
            .option(opt("I want more meaningful work", "purpose").with_trait("people_helper", 1.5).then("transferable_skills"))
            .option(opt("I want to earn more", "income").with_trait("entrepreneurial", 1.0).then("transferable_skills"))
            .option(opt("I need more flexibility", "flexibility").with_trait("independent_worker", 1.5).then("transferable_skills"))
            .option(opt("I'm burned out", "burnout").with_trait("adaptable", 1.0).then("transferable_skills")),
        QuestionNode::new("transferable_skills", "Which of your skills would you most like to carry over?", QuestionCategory::Interests)
            .requires("changer_motivation")
            .option(opt("Technical or analytical skills", "technical").with_trait("analytical_mind", 2.0).then("core_interests"))
            .option(opt("Managing people and projects", "management").with_trait("leadership", 2.0).then("core_interests"))
            .option(opt("Creative skills", "creative").with_trait("creative_expression", 2.0).then("core_interests"))
            .option(opt("Working with people", "interpersonal").with_trait("collaborator", 2.0).then("core_interests")),
        // Working professional branch
        QuestionNode::new("pro_growth_goal", "What kind of growth are you after?", QuestionCategory::Direction)
            .requires(LIFE_STAGE)
            .when(Condition::answer_is(LIFE_STAGE, "professional"))
            .option(opt("Moving up where I am", "promotion").with_trait("leadership", 1.5).then("core_interests"))
            .option(opt("Pivoting into a new area", "pivot").with_trait("adaptable", 1.5).then("core_interests"))
            .option(opt("Mastering my craft", "mastery").with_trait("detail_oriented", 1.5).then("core_interests"))
            .option(opt("Building my own venture", "venture").with_trait("entrepreneurial", 2.0).then("core_interests")),
        // Shared questions
        QuestionNode::new("core_interests", "Which activity sounds most rewarding?", QuestionCategory::Interests)
            .requires(LIFE_STAGE)
            .option(opt("Solving tricky problems", "solving_problems").with_trait("analytical_mind", 2.0))
            .option(opt("Creating something new", "creating").with_trait("creative_expression", 2.0))
            .option(opt("Helping people directly", "helping").with_trait("people_helper", 2.0))
            .option(opt("Leading a group toward a goal", "leading").with_trait("leadership", 2.0))
            .option(opt("Building things with my hands", "building").with_trait("practical_builder", 2.0))
            .option(opt("Exploring big ideas", "exploring_ideas").with_trait("intellectual_curiosity", 2.0)),
        QuestionNode::new("work_environment", "Where do you picture yourself working?", QuestionCategory::WorkStyle)
            .requires("core_interests")
            .option(opt("A structured office", "office").with_trait("detail_oriented", 1.0))
            .option(opt("From home, on my own schedule", "remote").with_trait("independent_worker", 1.5))
            .option(opt("Outdoors or on site", "outdoors").with_trait("practical_builder", 1.5))
            .option(opt("A lab or research setting", "lab").with_trait("analytical_mind", 1.0))
            .option(opt("A studio or creative space", "studio").with_trait("creative_expression", 1.0))
            .option(opt("Out in the community", "community").with_trait("people_helper", 1.0)),
        QuestionNode::new("work_style", "How do you prefer to work?", QuestionCategory::WorkStyle)
            .requires("core_interests")
            .option(opt("As part of a team", "team").with_trait("collaborator", 2.0))
            .option(opt("On my own", "solo").with_trait("independent_worker", 2.0))
            .option(opt("Taking the lead", "lead").with_trait("leadership", 2.0))
            .option(opt("A mix, depending on the task", "mix").with_trait("adaptable", 1.5)),
        QuestionNode::new("leadership_experience", "What leadership experience do you have?", QuestionCategory::WorkStyle)
            .requires("work_style")
            .when(Condition::any_value(["lead", "leading", "promotion", "management"]))
            .option(opt("I've led teams", "led_teams").with_trait("leadership", 2.0))
            .option(opt("I've led projects", "led_projects").with_trait("leadership", 1.0))
            .option(opt("I lead informally among peers", "informal").with_trait("collaborator", 1.0))
            .option(opt("None yet, but I want to", "aspiring").with_trait("intellectual_curiosity", 0.5)),
        QuestionNode::new("problem_approach", "When you hit a hard problem, what do you do first?", QuestionCategory::WorkStyle)
            .requires("work_style")
            .option(opt("Look at the data", "data").with_trait("analytical_mind", 1.5))
            .option(opt("Trust my intuition", "intuition").with_trait("creative_expression", 1.5))
            .option(opt("Talk it through with others", "discuss").with_trait("collaborator", 1.5))
            .option(opt("Try something and iterate", "experiment").with_trait("practical_builder", 1.5)),
        QuestionNode::new("motivation", "What matters most to you in a career?", QuestionCategory::Values)
            .requires("core_interests")
            .option(opt("Making an impact", "impact").with_trait("people_helper", 1.5))
            .option(opt("Earning well", "income").with_trait("entrepreneurial", 1.5))
            .option(opt("Creative freedom", "creativity").with_trait("creative_expression", 1.5))
            .option(opt("Stability and security", "stability").with_trait("detail_oriented", 1.5))
            .option(opt("Always learning", "learning").with_trait("intellectual_curiosity", 1.5))
            .option(opt("Independence", "freedom").with_trait("independent_worker", 1.5)),
        QuestionNode::new("structure_preference", "How much structure do you like in your day?", QuestionCategory::Values)
            .requires("motivation")
            .option(opt("Clear routines and expectations", "high_structure").with_trait("detail_oriented", 2.0))
            .option(opt("Some structure with room to move", "some_structure"))
            .option(opt("Every day different", "flexible").with_trait("adaptable", 2.0)),
        QuestionNode::new("risk_tolerance", "How comfortable are you with career risk?", QuestionCategory::Values)
            .requires("motivation")
            .when(Condition::answer_in(LIFE_STAGE, ["recent_grad", "career_changer", "professional"]))
            .option(opt("I prefer a safe path", "low").with_trait("detail_oriented", 1.0))
            .option(opt("Some risk is fine", "medium").with_trait("adaptable", 1.0))
            .option(opt("I'm happy to bet on myself", "high").with_trait("entrepreneurial", 2.0)),
        QuestionNode::new("study_commitment", "How long are you willing to study?", QuestionCategory::Planning)
            .requires("core_interests")
            .when(Condition::answer_in(LIFE_STAGE, ["high_school", "college"]))
            .option(opt("Two years or less", "two_years").with_trait("practical_builder", 1.0))
            .option(opt("About four years", "four_years"))
            .option(opt("Graduate school and beyond", "advanced").with_trait("intellectual_curiosity", 2.0)),
        QuestionNode::new("retraining_budget", "How would you like to retrain?", QuestionCategory::Planning)
            .requires("transferable_skills")
            .option(opt("Short online courses", "short_courses").with_trait("practical_builder", 1.0))
            .option(opt("A professional certificate", "certificate").with_trait("detail_oriented", 1.0))
            .option(opt("A full degree", "degree").with_trait("intellectual_curiosity", 1.5)),
        QuestionNode::new("timeline", "When do you want to make your next move?", QuestionCategory::Planning)
            .requires("motivation")
            .option(opt("As soon as possible", "asap"))
            .option(opt("Within the next year", "within_year"))
            .option(opt("I'm just exploring", "exploring_timeline")),
    ]
}

fn traits() -> Vec<TraitDefinition> {
    vec![
        TraitDefinition::new("analytical_mind", "Analytical Mind", "You break problems into parts and reason from evidence.")
            .with_strengths(&["Logical reasoning", "Working with data", "Systematic problem solving"])
            .with_careers(&["Software Engineer", "Data Scientist", "Financial Analyst", "Actuary"]),
        TraitDefinition::new("creative_expression", "Creative Expression", "You think in images, stories and possibilities.")
            .with_strengths(&["Original ideas", "Visual thinking", "Storytelling"])
            .with_careers(&["Graphic Designer", "UX Designer", "Content Writer", "Art Director"]),
        TraitDefinition::new("people_helper", "People Helper", "You are energized by improving other people's lives.")
            .with_strengths(&["Empathy", "Active listening", "Patience"])
            .with_careers(&["Registered Nurse", "School Counselor", "Social Worker", "Physical Therapist"]),
        TraitDefinition::new("leadership", "Natural Leader", "You rally people around a goal and take ownership of outcomes.")
            .with_strengths(&["Decision making", "Motivating others", "Accountability"])
            .with_careers(&["Product Manager", "Operations Manager", "Management Consultant", "Project Manager"]),
        TraitDefinition::new("practical_builder", "Practical Builder", "You learn by doing and like tangible results.")
            .with_strengths(&["Hands-on skill", "Troubleshooting", "Getting things done"])
            .with_careers(&["Electrician", "Mechanical Engineer", "Construction Manager", "Robotics Technician"]),
        TraitDefinition::new("intellectual_curiosity", "Intellectual Curiosity", "You follow questions wherever they lead.")
            .with_strengths(&["Research", "Fast learning", "Critical thinking"])
            .with_careers(&["Research Scientist", "University Professor", "Policy Analyst", "Journalist"]),
        TraitDefinition::new("collaborator", "Collaborator", "You do your best work alongside others.")
            .with_strengths(&["Teamwork", "Communication", "Conflict resolution"])
            .with_careers(&["Human Resources Specialist", "Teacher", "Customer Success Manager", "Event Coordinator"]),
        TraitDefinition::new("independent_worker", "Independent Worker", "You are self-directed and thrive with autonomy.")
            .with_strengths(&["Self-motivation", "Time management", "Focus"])
            .with_careers(&["Freelance Developer", "Technical Writer", "Photographer", "Translator"]),
        TraitDefinition::new("detail_oriented", "Detail Oriented", "You notice what others miss and value getting it right.")
            .with_strengths(&["Precision", "Organization", "Reliability"])
            .with_careers(&["Accountant", "Pharmacist", "Quality Assurance Engineer", "Paralegal"]),
        TraitDefinition::new("adaptable", "Adaptable", "You handle change well and pick up new contexts quickly.")
            .with_strengths(&["Flexibility", "Resilience", "Versatility"])
            .with_careers(&["Business Analyst", "Sales Representative", "Emergency Medical Technician", "Travel Consultant"]),
        TraitDefinition::new("entrepreneurial", "Entrepreneurial", "You spot opportunities and are willing to take risks on them.")
            .with_strengths(&["Initiative", "Risk taking", "Resourcefulness"])
            .with_careers(&["Startup Founder", "Marketing Manager", "Real Estate Agent", "Business Development Manager"]),
    ]
}

fn career_fields() -> IndexMap<String, Vec<String>> {
    let fields: [(&str, &[&str]); 10] = [
        ("technology", &["Software Engineer", "Cybersecurity Analyst", "Data Scientist", "Cloud Architect", "UX Designer", "IT Support Specialist"]),
        ("healthcare", &["Registered Nurse", "Physician Assistant", "Physical Therapist", "Pharmacist", "Medical Lab Technician", "Dental Hygienist"]),
        ("business", &["Financial Analyst", "Marketing Manager", "Management Consultant", "Accountant", "Product Manager", "Business Analyst"]),
        ("education", &["Teacher", "School Counselor", "Instructional Designer", "University Professor", "Education Administrator"]),
        ("arts", &["Graphic Designer", "Film Editor", "Art Director", "Musician", "Content Writer", "Animator"]),
        ("engineering", &["Mechanical Engineer", "Civil Engineer", "Electrical Engineer", "Biomedical Engineer", "Aerospace Engineer"]),
        ("science", &["Research Scientist", "Environmental Scientist", "Chemist", "Biologist", "Statistician"]),
        ("social_services", &["Social Worker", "Nonprofit Program Manager", "Community Health Worker", "Mental Health Counselor"]),
        ("trades", &["Electrician", "Plumber", "HVAC Technician", "Welder", "Construction Manager"]),
        ("law_policy", &["Paralegal", "Policy Analyst", "Lawyer", "Urban Planner"]),
    ];
    fields
        .iter()
        .map(|(field, careers)| {
            (
                field.to_string(),
                careers.iter().map(|c| c.to_string()).collect(),
            )
        })
        .collect()
}

fn scenarios() -> Vec<ScenarioRule> {
    let hs = Some("high_school");
    let college = Some("college");
    let grad = Some("recent_grad");
    let changer = Some("career_changer");
    let pro = Some("professional");
    vec![
        ScenarioRule::new(hs, "hs_subject_interest", "stem", "technology", 3),
        ScenarioRule::new(hs, "hs_subject_interest", "stem", "engineering", 2),
        ScenarioRule::new(hs, "hs_subject_interest", "arts", "arts", 3),
        ScenarioRule::new(hs, "hs_subject_interest", "social", "education", 2),
        ScenarioRule::new(hs, "hs_subject_interest", "social", "social_services", 2),
        ScenarioRule::new(hs, "hs_subject_interest", "business", "business", 3),
        ScenarioRule::new(hs, "hs_subject_interest", "health", "healthcare", 3),
        ScenarioRule::new(hs, "hs_college_direction", "hands_on", "trades", 2),
        ScenarioRule::new(college, "college_field", "stem", "technology", 3),
        ScenarioRule::new(college, "college_field", "stem", "science", 2),
        ScenarioRule::new(college, "college_field", "arts", "arts", 3),
        ScenarioRule::new(college, "college_field", "health", "healthcare", 3),
        ScenarioRule::new(college, "college_field", "business", "business", 3),
        ScenarioRule::new(college, "college_field", "social_science", "social_services", 2),
        ScenarioRule::new(college, "college_field", "social_science", "law_policy", 2),
        ScenarioRule::new(grad, "grad_focus", "grad_school", "science", 2),
        ScenarioRule::new(grad, "grad_focus", "grad_school", "education", 2),
        ScenarioRule::new(grad, "grad_focus", "job_search", "technology", 2),
        ScenarioRule::new(grad, "grad_focus", "start_something", "business", 2),
        ScenarioRule::new(changer, "transferable_skills", "technical", "technology", 3),
        ScenarioRule::new(changer, "transferable_skills", "management", "business", 3),
        ScenarioRule::new(changer, "transferable_skills", "creative", "arts", 2),
        ScenarioRule::new(changer, "transferable_skills", "interpersonal", "education", 2),
        ScenarioRule::new(changer, "transferable_skills", "interpersonal", "social_services", 2),
        ScenarioRule::new(pro, "pro_growth_goal", "promotion", "business", 2),
        ScenarioRule::new(pro, "pro_growth_goal", "venture", "business", 2),
        ScenarioRule::new(pro, "pro_growth_goal", "mastery", "engineering", 2),
        ScenarioRule::new(None, "core_interests", "building", "trades", 2),
        ScenarioRule::new(None, "core_interests", "building", "engineering", 2),
        ScenarioRule::new(None, "core_interests", "helping", "healthcare", 2),
        ScenarioRule::new(None, "work_environment", "outdoors", "trades", 2),
        ScenarioRule::new(None, "motivation", "impact", "social_services", 2),
    ]
}

fn insights() -> Vec<InsightRule> {
    vec![
        InsightRule::any(&["stem", "technical", "solving_problems", "data"], "You gravitate toward analytical problem solving."),
        InsightRule::any(&["arts", "creative", "creating", "creativity", "studio"], "Creative work shows up throughout your answers."),
        InsightRule::any(&["helping", "impact", "social", "interpersonal", "community"], "Helping others is a recurring theme for you."),
        InsightRule::any(&["lead", "leading", "promotion", "management"], "You show clear leadership potential."),
        InsightRule::all(&["remote", "solo"], "You do your best work independently."),
        InsightRule::any(&["career_changer", "pivot", "switching"], "You're open to change, so transferable skills will matter."),
        InsightRule::any(&["start_something", "venture", "high"], "You have an entrepreneurial streak."),
    ]
}
