//! Admin commands: users and groups

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use console::style;

use domain::value_objects::UserRole;

use crate::context::AppContext;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RoleArg {
    Admin,
    User,
}

impl From<RoleArg> for UserRole {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Admin => UserRole::Admin,
            RoleArg::User => UserRole::User,
        }
    }
}

#[derive(Subcommand)]
pub enum AdminCommands {
    /// List all groups
    Groups,
    /// Create a group
    AddGroup {
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Activate or deactivate a group (deactivation cascades to users)
    SetGroupActive {
        group_id: String,
        #[arg(value_parser = clap::value_parser!(bool))]
        active: bool,
    },
    /// Remove a group (refused while it still has active users)
    DeleteGroup { group_id: String },

    /// List users, optionally for one group
    Users {
        #[arg(long)]
        of_group: Option<String>,
    },
    /// Create a user in a group
    AddUser {
        username: String,
        #[arg(long, value_enum, default_value = "user")]
        role: RoleArg,
        #[arg(long)]
        group_id: String,
    },
    /// Activate or deactivate a user
    SetUserActive {
        user_id: String,
        #[arg(value_parser = clap::value_parser!(bool))]
        active: bool,
    },
    /// Remove a user (the profile is deactivated, never deleted)
    DeleteUser { user_id: String },
}

pub async fn run(ctx: &AppContext, command: AdminCommands) -> Result<()> {
    match command {
        AdminCommands::Groups => {
            for group in ctx.admin.list_groups().await? {
                let status = if group.is_active() {
                    style("active").green()
                } else {
                    style("inactive").red()
                };
                println!(
                    "{:<24} {:<10} {}  {}",
                    group.name(),
                    status,
                    style(group.id()).dim(),
                    group.description()
                );
            }
        }
        AdminCommands::AddGroup { name, description } => {
            let group = ctx.admin.create_group(&name, &description).await?;
            println!(
                "{} Group '{}' created with id {}",
                style("✓").green(),
                group.name(),
                style(group.id()).dim()
            );
        }
        AdminCommands::SetGroupActive { group_id, active } => {
            let group = ctx.admin.set_group_active(&group_id, active).await?;
            println!(
                "{} Group '{}' is now {}",
                style("✓").green(),
                group.name(),
                if active { "active" } else { "inactive" }
            );
        }
        AdminCommands::DeleteGroup { group_id } => {
            let group = ctx.admin.delete_group(&group_id).await?;
            println!("{} Group '{}' deactivated", style("✓").green(), group.name());
        }
        AdminCommands::Users { of_group } => {
            for user in ctx.admin.list_users(of_group.as_deref()).await? {
                let status = if user.is_active() {
                    style("active").green()
                } else {
                    style("inactive").red()
                };
                println!(
                    "{:<20} {:<6} {:<10} group={} {}",
                    user.username(),
                    user.role(),
                    status,
                    user.group_id(),
                    style(user.id()).dim()
                );
            }
        }
        AdminCommands::AddUser {
            username,
            role,
            group_id,
        } => {
            let user = ctx
                .admin
                .create_user(&username, role.into(), &group_id)
                .await?;
            println!(
                "{} User '{}' created with id {}",
                style("✓").green(),
                user.username(),
                style(user.id()).dim()
            );
        }
        AdminCommands::SetUserActive { user_id, active } => {
            let user = ctx.admin.set_user_active(&user_id, active).await?;
            println!(
                "{} User '{}' is now {}",
                style("✓").green(),
                user.username(),
                if active { "active" } else { "inactive" }
            );
        }
        AdminCommands::DeleteUser { user_id } => {
            let user = ctx.admin.delete_user(&user_id).await?;
            println!(
                "{} User '{}' deactivated",
                style("✓").green(),
                user.username()
            );
        }
    }
    Ok(())
}
