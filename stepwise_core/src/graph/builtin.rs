//! Built-in coaching conversation: habits, confidence and career flows.

use super::NodeDef;

pub(super) const NODES: &[NodeDef] = &[
    NodeDef {
        id: "start",
        text: "Welcome sir/ma’am! How can I help you today?",
        options: &[
            ("habits_start", "I need motivation to start daily habits."),
            ("confidence_start", "I want to build confidence / stop overthinking."),
            ("career_start", "I need career / future planning help."),
        ],
        tags: &[
            "habit",
            "habits",
            "motivate",
            "motivation",
            "confidence",
            "career",
            "future",
        ],
    },
    // Habits
    NodeDef {
        id: "habits_start",
        text: "Great — clarity first. Do you want a short habit plan or tips to regain momentum?",
        options: &[
            ("habit_choose", "Help me choose a small habit."),
            ("habit_tips", "Give me quick tips to stay consistent."),
            ("habit_restart", "I tried & failed — help me restart."),
        ],
        tags: &["habit", "start", "consistency"],
    },
    NodeDef {
        id: "habit_choose",
        text: "Pick one simple habit to try for 7 days (tiny wins build momentum). Which appeals to you?",
        options: &[
            ("habit_walk", "Morning 10-minute walk"),
            ("habit_read", "Read 10 minutes / 10 pages"),
            ("habit_skill", "20-minute focused skill practice"),
        ],
        tags: &["walk", "read", "skill", "practice"],
    },
    NodeDef {
        id: "habit_walk",
        text: "A morning walk is excellent. Start Day 1 with 10 minutes after waking. Want a reminder format or a checklist?",
        options: &[
            ("habit_checklist", "Show me a simple checklist format"),
            ("habit_tips", "Give me tips to keep consistent"),
            ("back_to_habits", "Back to habit options"),
        ],
        tags: &[],
    },
    NodeDef {
        id: "habit_read",
        text: "Reading daily expands focus. Start small — 10 minutes. Would you like a reading plan or tips to avoid distraction?",
        options: &[
            ("habit_plan_read", "Show reading plan"),
            ("habit_tips", "Give me tips to keep consistent"),
            ("back_to_habits", "Back to habit options"),
        ],
        tags: &[],
    },
    NodeDef {
        id: "habit_skill",
        text: "Focused practice is powerful. Pick a specific skill and commit 20 minutes daily. Want a micro-plan?",
        options: &[
            ("habit_micro_skill", "Yes, give a micro-plan"),
            ("habit_tips", "Give me tips to keep consistent"),
            ("back_to_habits", "Back to habit options"),
        ],
        tags: &[],
    },
    NodeDef {
        id: "habit_checklist",
        text: "Checklist: [ ] Day 1 ✓ [ ] Day 2 [ ] Day 3 ... Keep it visible. Would you like accountability tips?",
        options: &[
            ("habit_account", "Yes — accountability tips"),
            ("habit_tips", "General tips"),
            ("end_node", "Continue"),
        ],
        tags: &[],
    },
    NodeDef {
        id: "habit_tips",
        text: "Tip: Start small, attach habit to a routine, track progress, and treat slip-ups as data, not failure.",
        options: &[
            ("habit_choose", "Choose a habit"),
            ("habit_account", "How to stay accountable?"),
            ("start", "Main menu"),
        ],
        tags: &[],
    },
    NodeDef {
        id: "habit_restart",
        text: "Restarting is normal — focus on one tiny next step. Would you like a regret-free micro-plan or motivational strategies?",
        options: &[
            ("habit_micro_plan", "Give me a micro-plan"),
            ("motivation_boost", "I need a short motivational boost"),
            ("start", "Main menu"),
        ],
        tags: &[],
    },
    NodeDef {
        id: "habit_plan_read",
        text: "Reading plan: week 1 read 10 minutes after dinner, week 2 stretch to 15 minutes, week 3 pick a book you chose yourself.",
        options: &[
            ("habit_tips", "Tips to avoid distraction"),
            ("habit_checklist", "Show me a checklist"),
        ],
        tags: &[],
    },
    NodeDef {
        id: "back_to_habits",
        text: "Here are your habit options again. Small and repeatable wins.",
        options: &[
            ("habit_choose", "Choose a different habit"),
            ("habit_tips", "Tips to stay consistent"),
            ("habit_restart", "Help me restart"),
        ],
        tags: &[],
    },
    NodeDef {
        id: "habit_micro_plan",
        text: "Micro-plan: Day 1–3 focus on starting, Day 4–7 increase consistency. Log briefly each day.",
        options: &[
            ("habit_choose", "Choose a habit"),
            ("habit_tips", "Tips"),
            ("start", "Main menu"),
        ],
        tags: &[],
    },
    NodeDef {
        id: "habit_micro_skill",
        text: "Micro-plan for skill: 1) Pick exact sub-skill 2) 20-min focused block 3) Reflect 5 min. Start today?",
        options: &[
            ("practice_now", "Start now"),
            ("habit_tips", "Tips to focus"),
            ("start", "Main menu"),
        ],
        tags: &[],
    },
    NodeDef {
        id: "habit_account",
        text: "Accountability: tell a friend, set a visible tracker, or check in every 3 days. Want a sample check-in message?",
        options: &[
            ("sample_checkin", "Show sample check-in"),
            ("habit_tips", "General tips"),
            ("start", "Main menu"),
        ],
        tags: &[],
    },
    NodeDef {
        id: "sample_checkin",
        text: "Sample: 'I'm starting a 7-day habit — day 1 done! I'll check in again.' Simple and clear.",
        options: &[
            ("habit_choose", "Choose a habit"),
            ("motivation_boost", "Motivational line"),
            ("start", "Main menu"),
        ],
        tags: &[],
    },
    // Confidence
    NodeDef {
        id: "confidence_start",
        text: "Building confidence begins with small, repeatable wins. Which area troubles you most?",
        options: &[
            ("conf_social", "Social anxiety / approaching people"),
            ("conf_selfimage", "Self-image / comparing with others"),
            ("conf_overthink", "Overthinking / decision paralysis"),
        ],
        tags: &["confidence", "overthinking", "social", "anxiety"],
    },
    NodeDef {
        id: "conf_social",
        text: "For social anxiety: start with short, low-pressure interactions. Would you like roleplay prompts or a daily micro-challenge?",
        options: &[
            ("conf_roleplay", "Roleplay prompts"),
            ("conf_micro", "Daily micro-challenge"),
            ("motivation_boost", "Motivational tip"),
        ],
        tags: &[],
    },
    NodeDef {
        id: "conf_roleplay",
        text: "Roleplay: practice a friendly opener and a follow-up question. Try it now or receive examples to rehearse.",
        options: &[
            ("practice_now", "Let me practice now"),
            ("examples", "Show example openers"),
            ("conf_micro", "Try a micro-challenge"),
        ],
        tags: &[],
    },
    NodeDef {
        id: "conf_micro",
        text: "Micro-challenge: start a 2-minute conversation with a familiar person this week. Small success fuels confidence.",
        options: &[
            ("confidence_progress", "How to track progress?"),
            ("conf_roleplay", "Roleplay prompts"),
            ("start", "Main menu"),
        ],
        tags: &[],
    },
    NodeDef {
        id: "confidence_progress",
        text: "Track progress with one line after each attempt: what you did and how it felt. Patterns show up within a week.",
        options: &[("conf_micro", "Another micro-challenge")],
        tags: &[],
    },
    NodeDef {
        id: "conf_selfimage",
        text: "Self-image improves when actions match values. Would you like concrete daily actions or coping phrases?",
        options: &[
            ("actions", "Concrete daily actions"),
            ("phrases", "Short coping phrases"),
            ("motivation_boost", "Short motivational quote"),
        ],
        tags: &[],
    },
    NodeDef {
        id: "actions",
        text: "Daily actions: keep one small promise to yourself, move your body for 10 minutes, and note one thing you did well.",
        options: &[
            ("phrases", "Short coping phrases"),
            ("conf_selfimage", "Back to self-image"),
        ],
        tags: &[],
    },
    NodeDef {
        id: "phrases",
        text: "Coping phrases: 'Progress, not perfection.' 'I can do hard things slowly.' 'Comparison is not data.'",
        options: &[("actions", "Concrete daily actions")],
        tags: &[],
    },
    NodeDef {
        id: "conf_overthink",
        text: "Decision paralysis reduces with time-boxing and next-action focus. Want a 3-step decision method?",
        options: &[
            ("decision_method", "Yes — 3-step decision method"),
            ("mindfulness_tip", "Give a quick mindfulness tip"),
            ("start", "Main menu"),
        ],
        tags: &[],
    },
    NodeDef {
        id: "decision_method",
        text: "3-step method: 1) List top 2 options 2) Time-box decision 3) Commit to action for 3 days. Want an example?",
        options: &[
            ("decision_example", "Show example"),
            ("conf_overthink", "Overthinking help"),
            ("start", "Main menu"),
        ],
        tags: &[],
    },
    NodeDef {
        id: "decision_example",
        text: "Example: choosing between two courses. List both, give yourself 24 hours, then commit to one for 3 days before reviewing.",
        options: &[
            ("decision_method", "Back to the method"),
            ("conf_overthink", "Overthinking help"),
        ],
        tags: &[],
    },
    NodeDef {
        id: "mindfulness_tip",
        text: "Mindfulness tip: take three slow breaths and name five things you can see. Then pick the next small action.",
        options: &[("conf_overthink", "Back to overthinking help")],
        tags: &[],
    },
    // Career
    NodeDef {
        id: "career_start",
        text: "Career clarity begins with honest assessment. Do you want skill mapping, resume tips, or interview prep?",
        options: &[
            ("career_skills", "Skill mapping / learning plan"),
            ("career_resume", "Resume / CV tips"),
            ("career_interview", "Interview preparation"),
        ],
        tags: &["career", "job", "resume", "interview"],
    },
    NodeDef {
        id: "career_skills",
        text: "Identify one high-leverage skill you can start learning. Would you like a 4-week learning plan or a quick resource list?",
        options: &[
            ("learn_plan", "4-week micro learning plan"),
            ("resource_list", "Quick resource list"),
            ("career_resume", "Resume tips"),
        ],
        tags: &[],
    },
    NodeDef {
        id: "learn_plan",
        text: "4-week plan: week 1 basics, week 2 a small project, week 3 ask for feedback, week 4 share what you built.",
        options: &[
            ("resource_list", "Quick resource list"),
            ("career_resume", "Add it to my resume"),
        ],
        tags: &[],
    },
    NodeDef {
        id: "resource_list",
        text: "Resources: one free course, one good book, one community to ask questions. Keep the list short so you actually start.",
        options: &[
            ("learn_plan", "4-week learning plan"),
            ("career_start", "Career menu"),
        ],
        tags: &[],
    },
    NodeDef {
        id: "career_resume",
        text: "Resume tip: keep it concise, highlight impact, list measurable results. Want a one-line achievement template?",
        options: &[
            ("achievement_template", "Show template"),
            ("career_skills", "Find skills to list"),
            ("start", "Main menu"),
        ],
        tags: &[],
    },
    NodeDef {
        id: "achievement_template",
        text: "Template: 'Did [action], which resulted in [measurable result] over [time frame].'",
        options: &[
            ("career_resume", "More resume tips"),
            ("career_interview", "Interview preparation"),
        ],
        tags: &[],
    },
    NodeDef {
        id: "career_interview",
        text: "Interview prep: structure answers with STAR (Situation, Task, Action, Result). Want mock interview questions or tips?",
        options: &[
            ("mock_qs", "Give mock interview questions"),
            ("interview_tips", "Quick interview tips"),
            ("resource_list", "Resource list"),
        ],
        tags: &[],
    },
    NodeDef {
        id: "mock_qs",
        text: "Mock questions: 1) Tell me about yourself. 2) Describe a challenge you solved. 3) Why this role?",
        options: &[
            ("interview_tips", "Quick interview tips"),
            ("career_interview", "Back to interview prep"),
        ],
        tags: &[],
    },
    NodeDef {
        id: "interview_tips",
        text: "Interview tips: research the company, prepare three short stories, and ask one thoughtful question at the end.",
        options: &[("mock_qs", "Mock interview questions")],
        tags: &[],
    },
    // Motivation and shared endpoints
    NodeDef {
        id: "motivation_boost",
        text: "Remember, {name}: consistent small steps compound. What's one small step you can take today?",
        options: &[
            ("habit_choose", "Pick a small habit"),
            ("confidence_start", "Work on confidence"),
            ("career_start", "Work on career"),
        ],
        tags: &["motivate", "inspire", "boost"],
    },
    NodeDef {
        id: "practice_now",
        text: "I'll simulate a brief roleplay. Say 'Hi' or type a greeting to begin practice.",
        options: &[
            ("practice_listen", "Say 'Hi'"),
            ("examples", "See example openers"),
            ("start", "Main menu"),
        ],
        tags: &[],
    },
    NodeDef {
        id: "practice_listen",
        text: "Hi! Nice opener. Now follow up with a question about their day and listen for something to ask about next.",
        options: &[
            ("examples", "See example openers"),
            ("conf_micro", "Try a micro-challenge"),
        ],
        tags: &[],
    },
    NodeDef {
        id: "examples",
        text: "Example openers: 'Hi, how's your day?' / 'I liked your post on X — tell me more.' Try one now.",
        options: &[
            ("practice_now", "Practice now"),
            ("conf_micro", "Micro-challenge"),
            ("start", "Main menu"),
        ],
        tags: &[],
    },
    NodeDef {
        id: "end_node",
        text: "Good progress toward {goal}. Would you like to continue or save this plan for later (session-only)?",
        options: &[
            ("start", "Main menu"),
            ("motivation_boost", "A short motivational line"),
            ("habit_tips", "More habit tips"),
        ],
        tags: &[],
    },
    NodeDef {
        id: "fallback",
        text: "I understand. Could you clarify or choose one of the options below?",
        options: &[
            ("start", "Main menu"),
            ("motivation_boost", "Give me a motivation boost"),
            ("habit_choose", "Help me choose a habit"),
        ],
        tags: &[],
    },
];
