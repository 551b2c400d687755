// Fixed assistant replies for the screening conversation.
// Templates use `{placeholder}` substitution, same as the generation prompts.

pub const OPENING: &str = "Hello! Welcome to TalentScout's intelligent hiring assistant. I'm here to help with your initial screening process. Let's start by getting to know you better. What's your full name?";

pub const ASK_EMAIL_TEMPLATE: &str =
    "Nice to meet you, {name}! Could you please provide your email address?";

pub const ASK_PHONE: &str = "Great! What's your phone number?";

pub const ASK_EXPERIENCE: &str = "How many years of professional experience do you have?";

pub const ASK_POSITION: &str = "What position(s) are you interested in applying for?";

pub const ASK_LOCATION: &str = "What's your current location?";

pub const ASK_TECH_STACK: &str = "Now, let's talk about your technical skills. Please list your tech stack (programming languages, frameworks, databases, tools) separated by commas. For example: JavaScript, React, Node.js, MongoDB";

pub const TECH_STACK_ACK_TEMPLATE: &str = "Excellent! Based on your tech stack ({stack}), I'll ask you a few technical questions to assess your proficiency. Let's start with the first one:";

pub const NEXT_QUESTION_ACK: &str = "Thank you for your answer! Here's the next question:";

pub const SCREENING_COMPLETE: &str = "Excellent! That completes our initial screening. Thank you for taking the time to answer all the questions. Your responses have been recorded and our HR team will review your profile. You should expect to hear back from us within 2-3 business days. Is there anything else you'd like to know about the position or our company?";

pub const ALREADY_COMPLETED: &str = "Thank you for your interest! If you have any other questions in the future, feel free to reach out. Good luck with your application!";

/// Sent when the candidate uses a termination keyword.
pub const FAREWELL: &str = "Thank you for your time! Your information has been recorded. Our HR team will review your profile and get back to you within 2-3 business days. Have a great day!";
