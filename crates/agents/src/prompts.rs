//! The prompt pack for the travel workflow.
//!
//! Templates use `{name}` placeholders rendered by
//! [`PromptTemplate`](tripweaver_llm::PromptTemplate); doubled braces are
//! literal.

use tripweaver_llm::PromptTemplate;

/// Flight analysis over search results.
pub const FLIGHT_ANALYSIS: PromptTemplate = PromptTemplate::new(
    r#"You are a flight search specialist. Based on the travel requirements,
provide flight recommendations and analysis.

Destination: {destination}
Dates: {dates}
Budget: {budget}

Flight Search Results: {results}

Provide a summary of flight options with recommendations:"#,
);

/// Hotel analysis over search results.
pub const HOTEL_ANALYSIS: PromptTemplate = PromptTemplate::new(
    r#"You are a hotel search specialist. Based on the travel requirements,
provide hotel recommendations and analysis.

Destination: {destination}
Dates: {dates}
Budget: {budget}

Hotel Search Results: {results}

Provide a summary of hotel options with recommendations:"#,
);

/// Events analysis over search results. Needs no budget.
pub const EVENTS_ANALYSIS: PromptTemplate = PromptTemplate::new(
    r#"You are an events and activities specialist. Based on the travel requirements,
provide recommendations for events and activities.

Destination: {destination}
Dates: {dates}

Events Search Results: {results}

Provide a summary of events and activities with recommendations:"#,
);

/// Restaurant analysis over search results. Needs no dates.
pub const RESTAURANT_ANALYSIS: PromptTemplate = PromptTemplate::new(
    r#"You are a restaurant and dining specialist. Based on the travel requirements,
provide dining recommendations.

Destination: {destination}
Budget: {budget}

Restaurant Search Results: {results}

Provide a summary of dining options with recommendations:"#,
);

/// Attractions guide, generated entirely by the model.
pub const ATTRACTIONS_GUIDE: PromptTemplate = PromptTemplate::new(
    r#"You are a local attractions specialist with deep knowledge of {destination}.
Generate a comprehensive list of the main attractions and must-see places in this city.

Destination: {destination}
Dates: {dates}
Budget: {budget}

Please provide detailed information about the top attractions including:
- Historical sites and landmarks
- Museums and cultural attractions
- Natural attractions (parks, gardens, etc.)
- Architectural highlights
- Local specialties unique to this destination

For each attraction, include:
- Name and type
- Brief description
- Typical admission cost (if any)
- Recommended visit duration
- Rating/popularity
- Best time to visit

Format your response as a detailed travel guide for attractions in {destination}."#,
);

/// Social-venues guide, generated entirely by the model.
pub const SOCIAL_PLACES_GUIDE: PromptTemplate = PromptTemplate::new(
    r#"You are a local social life specialist with extensive knowledge of {destination}.
Generate comprehensive recommendations for places where travelers can meet locals and other travelers,
make social connections, and experience the local community culture.

Destination: {destination}
Dates: {dates}
Budget: {budget}

Please provide detailed information about social places and opportunities including:
- Public spaces and community gathering spots
- Cafés and social venues where locals and travelers mingle
- Sports and recreation centers with group activities
- Markets and social shopping areas
- Language exchange venues and international meetups
- Outdoor spaces popular with locals
- Community events and social activities
- Co-working spaces and social clubs

For each place/activity, include:
- Name and type of venue
- Description of the social atmosphere
- Best times to visit for social interaction
- Types of people you'll likely meet
- Activities or ways to engage with others
- Cost (if any)
- Tips for approaching and meeting people there

Focus specifically on genuine local experiences and places that foster authentic connections
rather than tourist-only venues. Format as a comprehensive social guide for {destination}."#,
);

/// The fan-in prompt: folds all six analyses plus the request into one plan.
pub const CONSOLIDATION: PromptTemplate = PromptTemplate::new(
    r#"You are a travel planning specialist. Consolidate the following search results
into a comprehensive, well-organized travel plan that includes main attractions and social opportunities.

Destination: {destination}
Dates: {dates}
Budget: {budget}

Flight Results: {flights}

Hotel Results: {hotels}

Events Results: {events}

Restaurant Results: {restaurants}

Main Attractions: {attractions}

Social Places (Places to Meet People): {social_places}

Create a detailed travel plan with recommendations and itinerary that includes:
1. Transportation and accommodation
2. Must-see attractions and sightseeing
3. Social opportunities and places to meet locals and other travelers
4. Dining recommendations
5. Events and activities

Focus especially on highlighting the main attractions and social connection opportunities."#,
);

/// Revision prompt for the modify path of the approval flow.
pub const PLAN_MODIFICATION: PromptTemplate = PromptTemplate::new(
    r#"The user has provided feedback on the travel plan. Please revise the plan based on their input.

Original Plan: {original_plan}

User Feedback: {feedback}

Provide a revised travel plan that addresses the user's concerns:"#,
);

/// Opening message of the AI-assisted intake conversation.
pub const INTAKE_OPENING: PromptTemplate = PromptTemplate::new(
    r#"You are a helpful travel planning assistant. Help the user create a travel request.

Start a friendly conversation to collect:
- Destination (city, country)
- Travel dates
- Budget constraints

Begin by asking: "I'd be happy to help you plan your trip! Where would you like to go?""#,
);

/// Context-aware reply prompt for each intake turn.
pub const INTAKE_CONTEXT: PromptTemplate = PromptTemplate::new(
    r#"You are a travel planning assistant. Based on the conversation history, help collect travel information.

CONVERSATION HISTORY:
{conversation_history}

CURRENTLY COLLECTED INFO:
Destination: {destination}
Dates: {dates}
Budget: {budget}

Latest user input: "{user_input}"

Instructions:
1. If the user provided new information, acknowledge it and update what you know
2. If you have ALL required info (destination, dates, budget), respond with:
   "Perfect! I have all the information I need.

   DESTINATION: [destination]
   DATES: [travel dates]
   BUDGET: [budget amount]
   COMPLETE: YES"

3. If information is still missing, ask for the next missing piece specifically
4. Be conversational and helpful, not repetitive
5. Don't ask for information already provided"#,
);

/// Structured-extraction prompt run against each intake user message.
pub const INTAKE_EXTRACTION: PromptTemplate = PromptTemplate::new(
    r#"Extract travel information from: "{user_input}"

Current info: Destination="{destination}", Dates="{dates}", Budget="{budget}"

Return JSON with any new information found:
{{"destination": "value or empty", "dates": "value or empty", "budget": "value or empty"}}

Only include fields that were mentioned in the user input. Use empty string for fields not mentioned."#,
);
