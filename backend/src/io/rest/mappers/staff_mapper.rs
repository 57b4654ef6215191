use shared::{CreateStaffRequest, StaffMember as StaffMemberDto, UpdateStaffRequest};

use crate::domain::commands::staff::{CreateStaffCommand, UpdateStaffCommand};
use crate::domain::models::StaffMember;

pub struct StaffMapper;

impl StaffMapper {
    pub fn to_dto(member: StaffMember) -> StaffMemberDto {
        StaffMemberDto {
            id: member.id,
            serial: member.serial,
            name: member.name,
            phone: member.phone,
            role: member.role,
            experience: member.experience,
            joining_date: member.joining_date,
            email: member.email,
        }
    }

    pub fn to_create_command(request: CreateStaffRequest) -> CreateStaffCommand {
        CreateStaffCommand {
            serial: request.serial,
            name: request.name,
            phone: request.phone,
            role: request.role,
            experience: request.experience,
            joining_date: request.joining_date,
        }
    }

    pub fn to_update_command(staff_id: String, request: UpdateStaffRequest) -> UpdateStaffCommand {
        UpdateStaffCommand {
            staff_id,
            serial: request.serial,
            name: request.name,
            phone: request.phone,
            role: request.role,
            experience: request.experience,
            joining_date: request.joining_date,
            email: request.email,
        }
    }
}
