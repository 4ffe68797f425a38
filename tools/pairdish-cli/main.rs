use clap::{Parser, Subcommand, ValueEnum};
use pairdish::calculators::nutrition::{
    ActivityLevel, CalorieGoal, Macro, MacroPreset, Sex, UnitSystem,
};
use pairdish::calculators::party::{EventType, MealTime};
use pairdish::calculators::wine::{ServingStyle, WineEventType, WineRatio};
use pairdish::format::{format_number, match_quality};
use pairdish::guides::glycemic::{GiFilter, SortKey};
use pairdish::prelude::*;
use serde::Serialize;
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Food and drink calculators, pairing guides and personality quizzes
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Load the catalog from a binary snapshot instead of the built-in tables
    #[arg(long, global = true, value_name = "SNAPSHOT")]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum QuizKind {
    CookingStyle,
    WinePersonality,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Take a personality quiz, interactively or from a list of answers
    Quiz {
        #[arg(value_enum)]
        kind: QuizKind,
        /// Option index for each question, e.g. `0,2,1`
        #[arg(long, value_delimiter = ',')]
        answers: Option<Vec<usize>>,
    },
    /// Daily calorie and macro targets
    Macros {
        #[arg(long, default_value_t = 70.0)]
        weight: f64,
        #[arg(long, default_value_t = 170.0)]
        height: f64,
        #[arg(long, default_value_t = 30.0)]
        age: f64,
        #[arg(long, default_value = "male")]
        sex: Sex,
        #[arg(long, default_value = "metric")]
        unit: UnitSystem,
        #[arg(long, default_value = "moderate")]
        activity: ActivityLevel,
        #[arg(long, default_value = "maintain")]
        goal: CalorieGoal,
        #[arg(long, default_value = "balanced")]
        preset: MacroPreset,
        /// Protein percentage; any of the three percentages switches to a
        /// custom split, rebalancing the others after each one
        #[arg(long)]
        protein: Option<f64>,
        #[arg(long)]
        carbs: Option<f64>,
        #[arg(long)]
        fat: Option<f64>,
    },
    /// Baker's percentages of a sourdough formula
    Sourdough {
        #[arg(long, default_value_t = 500.0)]
        flour: f64,
        #[arg(long, default_value_t = 350.0)]
        water: f64,
        #[arg(long, default_value_t = 100.0)]
        starter: f64,
        #[arg(long, default_value_t = 100.0)]
        starter_hydration: f64,
        #[arg(long, default_value_t = 10.0)]
        salt: f64,
        /// Recompute the water for this hydration percentage
        #[arg(long)]
        hydration: Option<f64>,
        /// Scale the whole dough to this weight in grams
        #[arg(long)]
        scale: Option<f64>,
    },
    /// Convert an oven temperature between Fahrenheit, Celsius and gas marks
    Oven {
        /// Temperature or gas mark as typed, e.g. `350`, `180` or `4`
        value: String,
        #[arg(long, default_value = "fahrenheit")]
        unit: TemperatureUnit,
        /// Give the setting for a fan oven
        #[arg(long)]
        convection: bool,
    },
    /// Food quantities for a party
    Party {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        guests: Option<u32>,
        #[arg(long)]
        children: Option<u32>,
        #[arg(long)]
        event: Option<EventType>,
        #[arg(long)]
        meal: Option<MealTime>,
        #[arg(long)]
        hours: Option<f64>,
        #[arg(long)]
        heavy_eaters: Option<u32>,
        /// Start from the inputs in a share code or link
        #[arg(long, value_name = "CODE")]
        from_share: Option<String>,
        /// Print the plain-text shopping list
        #[arg(long)]
        list: bool,
        /// Print a share link for these inputs
        #[arg(long)]
        share: bool,
    },
    /// Bottles of wine for an event
    Wine {
        #[arg(long)]
        guests: Option<u32>,
        #[arg(long)]
        hours: Option<f64>,
        #[arg(long)]
        event: Option<WineEventType>,
        #[arg(long)]
        style: Option<ServingStyle>,
        /// Red, white and sparkling shares, e.g. `50,30,20`
        #[arg(long, value_delimiter = ',', num_args = 3)]
        ratio: Option<Vec<f64>>,
        #[arg(long, value_name = "CODE")]
        from_share: Option<String>,
        #[arg(long)]
        share: bool,
    },
    /// Batch cooking plan for a week of meals
    MealPrep {
        /// Slot assignment as `day:meal:template`, e.g. `monday:lunch:chicken-rice-bowl`
        #[arg(long = "assign", value_name = "SLOT")]
        assignments: Vec<String>,
        #[arg(long, default_value_t = 1)]
        servings: u32,
        /// List the templates available for every meal slot
        #[arg(long)]
        templates: bool,
    },
    /// Flavor pairings of an ingredient
    Flavor {
        /// Ingredient id; omit to search instead
        id: Option<String>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value = "all")]
        category: CategoryFilter<FlavorCategory>,
        /// Score how well `id` goes with this ingredient
        #[arg(long, value_name = "OTHER")]
        with: Option<String>,
    },
    /// Cheese guide
    Cheese {
        id: Option<String>,
        #[arg(long, default_value = "all")]
        category: CategoryFilter<CheeseCategory>,
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Coffee pairing guide
    Coffee {
        id: Option<String>,
        #[arg(long, default_value = "all")]
        category: CategoryFilter<CoffeeCategory>,
    },
    /// Chocolate pairing guide
    Chocolate {
        id: Option<String>,
        #[arg(long, default_value = "all")]
        kind: CategoryFilter<ChocolateKind>,
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Herb and spice matrix
    Herbs {
        id: Option<String>,
        #[arg(long, default_value = "all")]
        category: CategoryFilter<HerbCategory>,
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Glycemic index guide
    Glycemic {
        #[arg(long, default_value = "all")]
        category: CategoryFilter<GiCategory>,
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long)]
        low_only: bool,
        #[arg(long, default_value = "gi")]
        sort: SortKey,
        /// Show lower-GI swaps for this food id
        #[arg(long, value_name = "FOOD")]
        swaps: Option<String>,
    },
    /// Ingredient substitutions
    Substitutions {
        /// Ingredient id; omit to search instead
        id: Option<String>,
        #[arg(long, default_value = "")]
        search: String,
        /// Require this dietary tag; repeat for several
        #[arg(long = "tag")]
        tags: Vec<DietaryTag>,
    },
    /// Write the current catalog to a binary snapshot
    Snapshot { output: String },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let catalog = load_catalog(cli.catalog.as_deref());
    run(&cli, &catalog);
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("PAIRDISH_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_catalog(snapshot: Option<&str>) -> Catalog {
    match snapshot {
        Some(path) => CatalogSnapshot::from_file(path)
            .and_then(CatalogSnapshot::into_catalog)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load snapshot: {}", e))),
        None => Catalog::builtin()
            .unwrap_or_else(|e| exit_with_error(&format!("Built-in catalog is invalid: {}", e))),
    }
}

fn run(cli: &Cli, catalog: &Catalog) {
    let json = cli.json;
    match &cli.command {
        Command::Quiz { kind, answers } => match kind {
            QuizKind::CookingStyle => run_quiz(catalog.cooking_style(), answers.as_deref(), json),
            QuizKind::WinePersonality => {
                run_quiz(catalog.wine_personality(), answers.as_deref(), json)
            }
        },
        Command::Macros {
            weight,
            height,
            age,
            sex,
            unit,
            activity,
            goal,
            preset,
            protein,
            carbs,
            fat,
        } => {
            let overrides = [
                (Macro::Protein, *protein),
                (Macro::Carbs, *carbs),
                (Macro::Fat, *fat),
            ];
            let mut inputs = MacroInputs {
                weight: *weight,
                height: *height,
                age: *age,
                sex: *sex,
                unit: *unit,
                activity: *activity,
                goal: *goal,
                preset: *preset,
                ..Default::default()
            };
            if overrides.iter().any(|(_, value)| value.is_some()) {
                inputs.preset = MacroPreset::Custom;
                for (which, value) in overrides {
                    if let Some(value) = value {
                        inputs.custom = inputs.custom.rebalance(which, value);
                    }
                }
                debug!(split = ?inputs.custom, "Using custom macro split");
            }
            let plan = MacroPlan::compute(&inputs);
            emit(json, &plan, |plan| {
                println!("BMR:             {} kcal", format_number(plan.bmr, 0));
                println!("TDEE:            {} kcal", format_number(plan.tdee, 0));
                println!("Target:          {} kcal", format_number(plan.target_calories, 0));
                println!("Protein:         {} g", plan.grams.protein);
                println!("Carbohydrates:   {} g", plan.grams.carbs);
                println!("Fat:             {} g", plan.grams.fat);
                for meals in [3, 4] {
                    let per_meal = plan.grams.per_meal(meals);
                    println!(
                        "Per meal ({} meals): {} g protein, {} g carbs, {} g fat",
                        meals, per_meal.protein, per_meal.carbs, per_meal.fat
                    );
                }
            });
        }
        Command::Sourdough {
            flour,
            water,
            starter,
            starter_hydration,
            salt,
            hydration,
            scale,
        } => {
            let formula = DoughFormula {
                flour: *flour,
                water: *water,
                starter: *starter,
                starter_hydration: *starter_hydration,
                salt: *salt,
            };
            let analysis = formula.analyze();
            emit(json, &analysis, |a| {
                println!(
                    "Hydration:       {}% ({})",
                    format_number(a.hydration, 1),
                    a.level.label()
                );
                println!("Total flour:     {} g", format_number(a.total_flour, 1));
                println!("Total water:     {} g", format_number(a.total_water, 1));
                println!("Starter:         {}%", format_number(a.starter_percent, 1));
                println!("Salt:            {}%", format_number(a.salt_percent, 1));
                println!("Dough weight:    {} g", format_number(a.total_weight, 0));
            });
            let adjustments = [
                ("Adjusted to hydration", hydration.and_then(|t| formula.adjust_to_hydration(t))),
                ("Scaled to weight", scale.and_then(|t| formula.scale_to_weight(t))),
            ];
            for (label, adjusted) in adjustments {
                if let Some(dough) = adjusted {
                    emit(json, &dough, |d| {
                        println!("\n{}:", label);
                        println!(
                            "  flour {} g, water {} g, starter {} g, salt {} g ({} g total)",
                            format_number(d.flour, 0),
                            format_number(d.water, 0),
                            format_number(d.starter, 0),
                            format_number(d.salt, 0),
                            format_number(d.total_weight, 0)
                        );
                    });
                }
            }
        }
        Command::Oven {
            value,
            unit,
            convection,
        } => {
            let conversion = oven::convert(value, *unit, *convection);
            emit(json, &conversion, |c| {
                println!("{}°F / {}°C / gas mark {}", c.fahrenheit, c.celsius, c.gas_mark);
                println!("{}", c.heat_level);
            });
        }
        Command::Party {
            name,
            guests,
            children,
            event,
            meal,
            hours,
            heavy_eaters,
            from_share,
            list,
            share,
        } => {
            let mut inputs: PartyInputs = restore(from_share.as_deref());
            if let Some(name) = name {
                inputs.event_name = name.clone();
            }
            inputs.guest_count = guests.unwrap_or(inputs.guest_count);
            inputs.child_count = children.unwrap_or(inputs.child_count);
            inputs.event_type = event.unwrap_or(inputs.event_type);
            inputs.meal_time = meal.unwrap_or(inputs.meal_time);
            inputs.duration = hours.unwrap_or(inputs.duration);
            inputs.heavy_eaters = heavy_eaters.unwrap_or(inputs.heavy_eaters);
            let inputs = inputs.clamped();

            if *list {
                print!("{}", inputs.shopping_list());
            } else {
                emit(json, &inputs.plan(), |plan| {
                    for q in &plan.quantities {
                        let amount = match (q.total_pounds, q.total_pieces) {
                            (Some(lbs), _) => format!("{} lbs", lbs),
                            (_, Some(pieces)) => format!("{} {}", pieces, q.category.unit),
                            _ => format!("{} oz", q.total_oz),
                        };
                        println!(
                            "{} {:<18} {:>12}  ({} each)",
                            q.category.icon, q.category.name, amount, q.per_person
                        );
                    }
                    println!(
                        "\nBudget: ${} / ${} / ${}",
                        plan.budget.budget, plan.budget.moderate, plan.budget.premium
                    );
                });
            }
            if *share {
                print_share_link("/party-food-calculator", &inputs);
            }
        }
        Command::Wine {
            guests,
            hours,
            event,
            style,
            ratio,
            from_share,
            share,
        } => {
            let mut inputs: WineInputs = restore(from_share.as_deref());
            inputs.guests = guests.unwrap_or(inputs.guests);
            inputs.hours = hours.unwrap_or(inputs.hours);
            inputs.event_type = event.unwrap_or(inputs.event_type);
            inputs.serving_style = style.unwrap_or(inputs.serving_style);
            if let Some([red, white, sparkling]) = ratio.as_deref() {
                inputs.ratio = WineRatio {
                    red: *red,
                    white: *white,
                    sparkling: *sparkling,
                };
            }
            let plan = inputs.calculate().unwrap_or_else(|| {
                exit_with_error("The wine calculator needs at least one guest and half an hour.")
            });
            emit(json, &plan, |p| {
                println!(
                    "Glasses:    {} ({} per guest)",
                    p.total_glasses,
                    format_number(p.glasses_per_person, 1)
                );
                println!("Red:        {} bottles", p.red_bottles);
                println!("White:      {} bottles", p.white_bottles);
                println!("Sparkling:  {} bottles", p.sparkling_bottles);
                println!("Total:      {} bottles", p.total_bottles);
                println!("Budget:     ${} / ${} / ${}", p.budget.low, p.budget.mid, p.budget.high);
            });
            if *share {
                print_share_link("/wine-calculator", &inputs);
            }
        }
        Command::MealPrep {
            assignments,
            servings,
            templates,
        } => run_meal_prep(catalog, assignments, *servings, *templates, json),
        Command::Flavor {
            id,
            search,
            category,
            with,
        } => match (id, with) {
            (Some(id), Some(other)) => {
                let score = flavor::match_score(catalog, id, other);
                let (label, _) = match_quality(score);
                emit(json, &score, |s| println!("{} + {}: {}% ({})", id, other, s, label));
            }
            (Some(id), None) => {
                let pairings = flavor::pairings_for(catalog, id, *category);
                if pairings.is_empty() && catalog.flavor(id).is_none() {
                    exit_with_error(&format!("No ingredient with id '{}'", id));
                }
                emit(json, &pairings, |pairings| {
                    for p in pairings {
                        let marker = if p.is_unexpected { "*" } else { " " };
                        println!("{} {:>3}%  {}", marker, p.score, p.ingredient.profile().name);
                    }
                });
            }
            (None, _) => {
                let found = flavor::search(catalog, search.as_deref().unwrap_or(""));
                emit(json, &found, |found| {
                    for p in found {
                        println!("{:<20} {}", p.id, p.name);
                    }
                });
            }
        },
        Command::Cheese {
            id,
            category,
            query,
        } => match id {
            Some(id) => show_groups(json, id, cheese::pairings_for(catalog, id)),
            None => emit(json, &cheese::filter(catalog, *category, query), |found| {
                for c in found {
                    println!(
                        "{:<20} {} ({}, {})",
                        c.id,
                        c.name,
                        cheese::category_label(c.category),
                        c.origin
                    );
                }
            }),
        },
        Command::Coffee { id, category } => match id {
            Some(id) => show_groups(json, id, coffee::pairings_for(catalog, id)),
            None => emit(json, &coffee::filter(catalog, *category), |found| {
                for c in found {
                    println!("{:<20} {} ({})", c.id, c.name, coffee::category_label(c.category));
                }
            }),
        },
        Command::Chocolate { id, kind, query } => match id {
            Some(id) => show_groups(json, id, chocolate::pairings_for(catalog, id)),
            None => emit(json, &chocolate::filter(catalog, *kind, query), |found| {
                for c in found {
                    println!(
                        "{:<20} {} ({}, {})",
                        c.id,
                        c.name,
                        chocolate::kind_label(c.kind),
                        c.cocoa
                    );
                }
            }),
        },
        Command::Herbs {
            id,
            category,
            query,
        } => match id {
            Some(id) => {
                if catalog.herb(id).is_none() {
                    exit_with_error(&format!("No herb or spice with id '{}'", id));
                }
                emit(json, &herbs::pairing_suggestions(catalog, id), |found| {
                    for h in found {
                        println!("{:<20} {}", h.id, h.name);
                    }
                });
            }
            None => emit(json, &herbs::filter(catalog, *category, query), |found| {
                for h in found {
                    println!("{:<20} {} ({})", h.id, h.name, herbs::category_label(h.category));
                }
            }),
        },
        Command::Glycemic {
            category,
            query,
            low_only,
            sort,
            swaps,
        } => match swaps {
            Some(id) => emit(json, &glycemic::alternatives(catalog, id), |found| {
                for swap in found {
                    println!(
                        "{} (GI -{}): {}",
                        swap.to.name, swap.alternative.gi_reduction, swap.alternative.tips
                    );
                }
            }),
            None => {
                let options = GiFilter {
                    category: *category,
                    query: query.clone(),
                    low_gi_only: *low_only,
                    sort: *sort,
                };
                emit(json, &glycemic::filter(catalog, &options), |found| {
                    for f in found {
                        println!(
                            "{:<24} GI {:>3} ({:<6}) GL {:>2} ({})",
                            f.name,
                            f.gi,
                            glycemic::gi_level(f.gi),
                            f.gl,
                            glycemic::gl_level(f.gl)
                        );
                    }
                });
            }
        },
        Command::Substitutions { id, search, tags } => {
            let filter: DietaryFilter = tags.iter().copied().collect();
            match id {
                Some(id) => {
                    let subs = substitutions::substitutions_for(catalog, id, &filter)
                        .unwrap_or_else(|| {
                            exit_with_error(&format!("No ingredient with id '{}'", id))
                        });
                    emit(json, &subs, |subs| {
                        for s in subs {
                            println!("{} ({})", s.name, s.ratio);
                            println!("    {}", s.notes);
                        }
                    });
                }
                None => emit(json, &substitutions::search(catalog, search), |found| {
                    for ing in found {
                        println!(
                            "{:<20} {} ({} substitutes)",
                            ing.id,
                            ing.name,
                            ing.substitutions.len()
                        );
                    }
                }),
            }
        }
        Command::Snapshot { output } => {
            CatalogSnapshot::from_catalog(catalog)
                .save(output)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to write snapshot: {}", e)));
            println!("Catalog snapshot written to {}", output);
        }
    }
}

fn run_quiz<O: Outcome + Serialize>(bank: &QuizBank<O>, answers: Option<&[usize]>, json: bool) {
    let result = match answers {
        Some(answers) => bank.score(answers),
        None => {
            let mut session = QuizSession::new(bank);
            match session.play(io::stdin().lock(), io::stdout()) {
                Ok(result) => result,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    exit_with_error("Input ended before the quiz was finished.")
                }
                Err(e) => exit_with_error(&format!("Quiz failed: {}", e)),
            }
        }
    };

    emit(json, &result, |result| {
        if let Some(primary) = result.primary() {
            println!("\nYou are: {}", primary.outcome.name());
            println!("  {}", primary.outcome.tagline());
            println!("\n{}", primary.outcome.description());
        }
        if let Some(secondary) = result.secondary() {
            println!("\nRunner-up: {}", secondary.outcome.name());
        }
        println!();
        for (id, pct) in result.percentages() {
            println!("  {:<24} {:>3}%", id, pct);
        }
    });
}

fn run_meal_prep(
    catalog: &Catalog,
    slots: &[String],
    servings: u32,
    list_templates: bool,
    json: bool,
) {
    if list_templates {
        for &meal in MealType::ALL {
            println!("{}:", meal);
            for t in meal_prep::templates_for(catalog, meal) {
                println!("  {:<28} {} ({} min)", t.id, t.name, t.prep_time_minutes);
            }
        }
        return;
    }

    let mut plan = WeekPlan::new();
    for slot in slots {
        let parts: Vec<&str> = slot.splitn(3, ':').collect();
        let [day, meal, template] = parts.as_slice() else {
            exit_with_error(&format!("Slot '{}' is not day:meal:template", slot));
        };
        let day: Day = day
            .parse()
            .unwrap_or_else(|e| exit_with_error(&format!("{}", e)));
        let meal: MealType = meal
            .parse()
            .unwrap_or_else(|e| exit_with_error(&format!("{}", e)));
        let template = catalog
            .meal_template(template)
            .unwrap_or_else(|| {
                exit_with_error(&format!("No meal template with id '{}'", template))
            });
        if !plan.assign(day, meal, template) {
            exit_with_error(&format!("'{}' is not a {} recipe", template.name, meal));
        }
    }
    debug!(slots = slots.len(), servings, "Planning meal prep");

    let summary = plan.summary(catalog, servings);
    emit(json, &summary, |s| {
        for item in &s.items {
            println!(
                "{:<28} x{}  {} servings in {} batch(es)",
                item.template.name, item.count, item.total_servings, item.batches
            );
        }
        println!("\n{} meals, {} of prep", s.total_meals, s.total_prep_time());
        println!("Shopping list: {}", s.ingredients.join(", "));
    });
}

fn show_groups(json: bool, id: &str, groups: Option<Vec<PairingGroup<'_>>>) {
    let groups = groups.unwrap_or_else(|| exit_with_error(&format!("No entry with id '{}'", id)));
    emit(json, &groups, |groups| {
        for group in groups {
            println!("{}: {}", group.label, group.items.join(", "));
        }
    });
}

/// Starting inputs for a calculator: the decoded share code if one was given,
/// otherwise the defaults.
fn restore<T: serde::de::DeserializeOwned + Default>(share_code: Option<&str>) -> T {
    match share_code {
        Some(code) => {
            let code = share::code_from_url(code).unwrap_or(code);
            share::decode_or_default(code)
        }
        None => T::default(),
    }
}

fn print_share_link<T: Serialize>(path: &str, state: &T) {
    let url = share::share_url(path, state)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to build share link: {}", e)));
    println!("\nShare: {}", url);
}

fn emit<T: Serialize + ?Sized>(json: bool, value: &T, human: impl FnOnce(&T)) {
    if json {
        let text = serde_json::to_string_pretty(value)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize output: {}", e)));
        println!("{}", text);
    } else {
        human(value);
    }
}

/// A helper function to prompt the user and read a line of input.
fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
