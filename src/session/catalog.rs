// ABOUTME: Static content table for the eight session slots of a training cycle
// ABOUTME: Each slot carries a title, a training focus, and planned exercises with targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session content catalog

use serde::Serialize;

/// One planned exercise inside a session slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlannedExercise {
    /// Exercise name as shown in prompts
    pub name: &'static str,
    /// Target number of sets
    pub sets: u32,
    /// Target reps per set
    pub reps: u32,
}

/// Content of one session slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionSlot {
    /// Slot number, 1 through 8
    pub number: u32,
    /// Display title
    pub title: &'static str,
    /// Training focus summary
    pub focus: &'static str,
    /// Planned exercises in order
    pub exercises: &'static [PlannedExercise],
}

const fn planned(name: &'static str, sets: u32, reps: u32) -> PlannedExercise {
    PlannedExercise { name, sets, reps }
}

/// The eight slots of one cycle, indexed by `number - 1`
pub const SESSION_SLOTS: [SessionSlot; 8] = [
    SessionSlot {
        number: 1,
        title: "Upper Body Push",
        focus: "Chest, shoulders and triceps with heavy compound pressing",
        exercises: &[
            planned("Bench Press", 4, 8),
            planned("Overhead Press", 3, 8),
            planned("Incline Dumbbell Press", 3, 10),
            planned("Lateral Raise", 3, 12),
            planned("Tricep Pushdown", 3, 12),
        ],
    },
    SessionSlot {
        number: 2,
        title: "Lower Body Strength",
        focus: "Squat pattern and posterior chain strength",
        exercises: &[
            planned("Back Squat", 5, 5),
            planned("Romanian Deadlift", 3, 8),
            planned("Walking Lunge", 3, 10),
            planned("Leg Curl", 3, 12),
            planned("Calf Raise", 4, 15),
        ],
    },
    SessionSlot {
        number: 3,
        title: "Upper Body Pull",
        focus: "Back thickness and width with biceps accessory work",
        exercises: &[
            planned("Pull-Up", 4, 6),
            planned("Barbell Row", 4, 8),
            planned("Lat Pulldown", 3, 10),
            planned("Face Pull", 3, 15),
            planned("Bicep Curl", 3, 12),
        ],
    },
    SessionSlot {
        number: 4,
        title: "Core & Conditioning",
        focus: "Trunk stability and work capacity",
        exercises: &[
            planned("Plank", 3, 1),
            planned("Hanging Leg Raise", 3, 10),
            planned("Russian Twist", 3, 20),
            planned("Kettlebell Swing", 4, 15),
            planned("Ab Wheel Rollout", 3, 10),
        ],
    },
    SessionSlot {
        number: 5,
        title: "Full Body Power",
        focus: "Explosive compound lifts across the whole body",
        exercises: &[
            planned("Deadlift", 5, 3),
            planned("Push Press", 4, 5),
            planned("Front Squat", 3, 6),
            planned("Weighted Dip", 3, 8),
            planned("Farmer Carry", 3, 1),
        ],
    },
    SessionSlot {
        number: 6,
        title: "Upper Body Hypertrophy",
        focus: "Moderate loads and higher volume for chest, back and arms",
        exercises: &[
            planned("Dumbbell Bench Press", 4, 10),
            planned("Seated Cable Row", 4, 10),
            planned("Arnold Press", 3, 12),
            planned("Hammer Curl", 3, 12),
            planned("Skull Crusher", 3, 12),
        ],
    },
    SessionSlot {
        number: 7,
        title: "Lower Body Hypertrophy",
        focus: "Quad and glute volume with unilateral work",
        exercises: &[
            planned("Leg Press", 4, 12),
            planned("Bulgarian Split Squat", 3, 10),
            planned("Hip Thrust", 4, 10),
            planned("Leg Extension", 3, 15),
            planned("Seated Calf Raise", 4, 15),
        ],
    },
    SessionSlot {
        number: 8,
        title: "Active Recovery & Mobility",
        focus: "Light movement, mobility and core control before the next cycle",
        exercises: &[
            planned("Goblet Squat", 3, 12),
            planned("Band Pull-Apart", 3, 20),
            planned("Dead Bug", 3, 12),
            planned("Glute Bridge", 3, 15),
            planned("Side Plank", 3, 1),
        ],
    },
];
